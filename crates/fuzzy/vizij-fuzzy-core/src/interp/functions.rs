//! Curve helpers:
//! - logistic / inverse_logistic (sigmoid shoulders)
//! - gaussian / inverse_gaussian (bell shoulders)
//! - mean of candidate values

use std::f64::consts::LN_2;

/// Logistic curve through `mid`, scaled into `[min, max]`.
#[inline]
pub fn logistic(value: f64, mid: f64, min: f64, max: f64, rate: f64) -> f64 {
    let s = 1.0 / (1.0 + (-rate * (value - mid)).exp());
    s * (max - min) + min
}

/// Inverse of [`logistic`]. Diverges to ±infinity at `min` and `max`.
#[inline]
pub fn inverse_logistic(v: f64, mid: f64, min: f64, max: f64, rate: f64) -> f64 {
    mid - ((max - min) / (v - min) - 1.0).ln() / rate
}

/// Gaussian bell centred on `center` with full width at half maximum `fwhm`,
/// scaled into `[min, max]`. A zero width degenerates to a spike at the centre.
#[inline]
pub fn gaussian(value: f64, min: f64, max: f64, center: f64, fwhm: f64) -> f64 {
    if fwhm == 0.0 {
        return if value == center { max } else { min };
    }
    let d = value - center;
    let g = (-4.0 * LN_2 * d * d / (fwhm * fwhm)).exp();
    g * (max - min) + min
}

/// Inverse of [`gaussian`]: the two abscissas `[center + r, center - r]`
/// where the bell reaches `v`. Levels at or below `min` are infinitely far
/// from the centre; levels at or above `max` sit on it.
pub fn inverse_gaussian(v: f64, min: f64, max: f64, center: f64, fwhm: f64) -> [f64; 2] {
    if fwhm == 0.0 {
        return [center, center];
    }
    let n = (v - min) / (max - min);
    let r = if n >= 1.0 {
        0.0
    } else if n > 0.0 {
        fwhm.abs() * (n.ln() / (-4.0 * LN_2)).sqrt()
    } else {
        f64::INFINITY
    };
    [center + r, center - r]
}

/// Arithmetic mean; `None` when there is nothing to average.
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
