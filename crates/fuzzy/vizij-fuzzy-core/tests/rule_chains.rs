use anyhow::Result;
use approx::assert_relative_eq;
use vizij_fuzzy_core::{Config, FuzzyLogic, FuzzyVeracity, Quantifier, RuleId, Shape};

fn traced_logic() -> Result<FuzzyLogic> {
    let config = Config::from_json(
        r#"{ "trace_rules": true, "report_decimals": 2, "default_shape": "linear" }"#,
    )?;
    Ok(FuzzyLogic::new(config))
}

#[test]
fn distance_drives_speed() -> Result<()> {
    let logic = traced_logic()?;
    let near = logic.new_set("near", 10.0, 0.0);
    let far = logic.new_set("far", 0.0, 10.0);
    let slow = logic.new_set("slow", 100.0, 0.0);
    let fast = logic.new_set("fast", 0.0, 100.0);

    let distance = logic.new_value(4.0);
    let mut speed = logic.new_value(50.0);

    let is_near = distance.is(&near, &Quantifier::MODERATELY);
    let is_far = distance.is(&far, &Quantifier::MODERATELY);
    assert_relative_eq!(is_near.value(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(is_far.value(), 0.4, epsilon = 1e-12);

    logic
        .when(is_near)
        .then(&mut speed, &slow, &Quantifier::MODERATELY);
    logic
        .when(is_far)
        .then(&mut speed, &fast, &Quantifier::MODERATELY);

    // `is` sees the pending result, `is_not` the committed one.
    assert_relative_eq!(speed.is(&fast, &Quantifier::MODERATELY).value(), 0.4, epsilon = 1e-9);
    assert_relative_eq!(speed.is_not(&fast, &Quantifier::MODERATELY).value(), 0.5, epsilon = 1e-12);

    let result = speed.to_number();
    assert_relative_eq!(result, 40.0, epsilon = 1e-9);
    assert_eq!(speed.value(), result);
    assert_eq!(speed.rule_count(), 0);

    let report = speed.report();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].rule, RuleId(1));
    assert_eq!(report[1].rule, RuleId(2));
    assert_relative_eq!(report[1].value, 100.0, epsilon = 1e-9);

    let lines = speed.report_lines();
    assert_eq!(lines[0][0], "Rule #1: Set slow (moderately)");
    assert_eq!(lines[0][2], "With a veracity of: 0.6");
    assert_eq!(lines[1][0], "Rule #2: Set fast (moderately)");
    assert_eq!(lines[1][1], "Gives val: 100 from these values: [ 40, 160 ]");
    assert_eq!(lines[1][2], "With a veracity of: 0.4");
    Ok(())
}

#[test]
fn composed_conditions_weight_the_rule() -> Result<()> {
    let logic = traced_logic()?;
    let bright = logic.new_set("bright", 0.0, 1.0);
    let loud = logic.new_set("loud", 0.0, 1.0);
    let wide = logic.new_set("wide", 0.0, 50.0).with_shapes(Shape::Linear, Shape::Constant);

    let light = logic.new_value(0.75);
    let sound = logic.new_value(0.25);
    let mut scale = logic.new_value(0.0);

    let condition = light
        .is(&bright, &Quantifier::MODERATELY)
        .and(sound.is_not(&loud, &Quantifier::MODERATELY));
    let rule = logic.when(condition);
    assert_relative_eq!(rule.veracity().value(), 0.75, epsilon = 1e-12);

    rule.then(&mut scale, &wide, &logic.quantifier("somewhat")?);
    scale.defuzzify();

    let entry = &scale.report()[0];
    assert_eq!(entry.quantifier_name, "somewhat");
    assert_relative_eq!(entry.weight, 0.75, epsilon = 1e-12);
    // somewhat: 0.75^2 membership on the rising shoulder, constant beyond.
    assert_eq!(entry.contributing_values.len(), 1);
    assert_relative_eq!(entry.contributing_values[0], 50.0 * 0.5625, epsilon = 1e-9);
    assert_relative_eq!(scale.value(), 50.0 * 0.5625, epsilon = 1e-9);
    Ok(())
}

#[test]
fn untraced_values_keep_an_empty_report() {
    let logic = FuzzyLogic::default();
    let set = logic.new_set("any", 0.0, 1.0);
    let mut v = logic.new_value(0.0);
    logic
        .when(FuzzyVeracity::TRUE)
        .then(&mut v, &set, &Quantifier::EXTREMELY);
    v.to_float();
    assert!(v.report().is_empty());
}

#[test]
fn boolean_quantifier_targets_plateau() {
    let logic = FuzzyLogic::default();
    let set = logic.new_set("centered", 0.0, 10.0);
    let mut v = logic.new_value(3.0);
    // `not` inverts any veracity to full membership.
    v.set(&set, &Quantifier::NOT, FuzzyVeracity::new(0.3));
    assert_relative_eq!(v.defuzzify(), 10.0, epsilon = 1e-12);
}
