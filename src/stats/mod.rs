pub mod normal;

pub use normal::normal_cdf;

use crate::error::EmptyInputError;

/// Arithmetic mean of a non-empty sequence.
pub fn mean(values: &[f64]) -> Result<f64, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (denominator n - 1). `None` when n < 2.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = values.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}

/// std_dev / mean x 100. `None` when the mean is zero.
pub fn coefficient_of_variation(mean: f64, std_dev: f64) -> Option<f64> {
    if mean == 0.0 {
        return None;
    }
    Some(std_dev / mean * 100.0)
}

/// Quantile by linear interpolation between order statistics.
///
/// `None` on an empty sequence or p outside [0, 1].
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

pub fn min_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}
