//! Easing helpers for expression-driven animation:
//! - linear_remap (clamped range mapping)
//! - bezier_interpolation (cubic-bezier timing between two values)
//! - gaussian_interpolation (bell-shaped approach towards a target value)

use super::functions::gaussian;

/// Default `(x1, y1, x2, y2)` control points: a gentle ease in-out.
pub const DEFAULT_BEZIER: [f64; 4] = [0.33, 0.0, 0.66, 1.0];

/// Map `t` from `[t_min, t_max]` onto `[v1, v2]`, clamping outside the range.
#[inline]
pub fn linear_remap(t: f64, t_min: f64, t_max: f64, v1: f64, v2: f64) -> f64 {
    let span = t_max - t_min;
    if span == 0.0 {
        return if t < t_min { v1 } else { v2 };
    }
    let u = ((t - t_min) / span).clamp(0.0, 1.0);
    v1 + (v2 - v1) * u
}

#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
fn bezier_ease_t(t: f64, ctrl: [f64; 4]) -> f64 {
    let [x1, y1, x2, y2] = ctrl;
    let t = t.clamp(0.0, 1.0);
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut mid = t;
    for _ in 0..32 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

/// Interpolate from `v1` at `t_min` to `v2` at `t_max` along a cubic-bezier
/// timing curve. `ctrl` defaults to [`DEFAULT_BEZIER`]. An empty time range
/// returns `t` untouched.
pub fn bezier_interpolation(
    t: f64,
    t_min: f64,
    t_max: f64,
    v1: f64,
    v2: f64,
    ctrl: Option<[f64; 4]>,
) -> f64 {
    let span = t_max - t_min;
    if span == 0.0 {
        return t;
    }
    let u = ((t - t_min) / span).clamp(0.0, 1.0);
    let eased = bezier_ease_t(u, ctrl.unwrap_or(DEFAULT_BEZIER));
    (v2 - v1) * eased + v1
}

/// Bell-shaped approach from `v1` to `v2`, reaching `v2` exactly at `t_max`.
///
/// `rate` tightens the bell as time advances (it is remapped from 0.25 at
/// `t_min` to `rate` at `t_max`); negative rates are amplified tenfold.
/// The curve is offset so that it starts on `v1` at `t_min`.
pub fn gaussian_interpolation(t: f64, t_min: f64, t_max: f64, v1: f64, v2: f64, rate: f64) -> f64 {
    if t >= t_max {
        return v2;
    }
    let mut start = v1;
    if t != t_min {
        let at_min = gaussian_interpolation(t_min, t_min, t_max, v1, v2, rate);
        start -= at_min - v1;
    }
    let rate = if rate < 0.0 { rate * 10.0 } else { rate };
    let rate = linear_remap(t, t_min, t_max, 0.25, rate);
    let fwhm = (t_max - t_min) * (1.0 - rate);
    gaussian(t, start, v2, t_max, fwhm)
}
