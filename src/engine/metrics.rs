use crate::model::config::{ConfidenceBreakpoints, ScoreWeights};
use crate::model::tier::{ConsistencyBand, ReliabilityTier};
use crate::stats;

/// Probability (in percent) that a normally distributed observation
/// lands within the tolerance band around the hybrid's own mean.
/// `None` when fewer than 2 observations; 100.0 on zero dispersion.
pub fn z_probability(observations: &[f64], tolerance: f64) -> Option<f64> {
    if observations.len() < 2 {
        return None;
    }
    let mean = stats::mean(observations).ok()?;
    let std_dev = stats::sample_std_dev(observations)?;
    if std_dev == 0.0 {
        return Some(100.0);
    }

    let lower = mean * (1.0 - tolerance);
    let upper = mean * (1.0 + tolerance);
    let z_lower = (lower - mean) / std_dev;
    let z_upper = (upper - mean) / std_dev;
    let probability = (stats::normal_cdf(z_upper) - stats::normal_cdf(z_lower)) * 100.0;
    Some(probability.clamp(0.0, 100.0))
}

/// Share (in percent) of observations at or above the cohort bar,
/// reference_mean x threshold_ratio. `None` on an empty sequence.
pub fn success_rate(
    observations: &[f64],
    reference_mean: f64,
    threshold_ratio: f64,
) -> Option<f64> {
    if observations.is_empty() {
        return None;
    }
    let threshold = reference_mean * threshold_ratio;
    let hits = observations.iter().filter(|&&v| v >= threshold).count();
    Some(hits as f64 / observations.len() as f64 * 100.0)
}

/// Share (in percent) of observations below the hybrid's own bar,
/// own_mean x threshold_ratio. `None` on an empty sequence.
pub fn frustration_risk(observations: &[f64], threshold_ratio: f64) -> Option<f64> {
    if observations.is_empty() {
        return None;
    }
    let mean = stats::mean(observations).ok()?;
    let threshold = mean * threshold_ratio;
    let misses = observations.iter().filter(|&&v| v < threshold).count();
    Some(misses as f64 / observations.len() as f64 * 100.0)
}

/// Step discount for sample size. Boundaries are inclusive at each
/// breakpoint: count = full maps to 100, not 80.
pub fn observation_confidence_factor(count: usize, breakpoints: &ConfidenceBreakpoints) -> f64 {
    if count >= breakpoints.full {
        100.0
    } else if count >= breakpoints.high {
        80.0
    } else if count >= breakpoints.moderate {
        60.0
    } else {
        40.0
    }
}

/// Weighted composite of the four components. `None` if any rate
/// component is `None`; weights are applied as given, never
/// renormalized around a missing component.
pub fn composite_score(
    z_probability: Option<f64>,
    success_rate: Option<f64>,
    frustration_risk: Option<f64>,
    observation_count: usize,
    weights: &ScoreWeights,
    breakpoints: &ConfidenceBreakpoints,
) -> Option<f64> {
    let z = z_probability?;
    let success = success_rate?;
    let risk = frustration_risk?;
    let factor = observation_confidence_factor(observation_count, breakpoints);

    let score = z * weights.z_probability
        + success * weights.success_rate
        + (100.0 - risk) * weights.frustration_inverse
        + factor * weights.confidence;
    Some(score.clamp(0.0, 100.0))
}

pub fn classify(score: Option<f64>) -> ReliabilityTier {
    let Some(score) = score else {
        return ReliabilityTier::Undefined;
    };
    if score >= 80.0 {
        ReliabilityTier::Excellent
    } else if score >= 65.0 {
        ReliabilityTier::Good
    } else if score >= 50.0 {
        ReliabilityTier::Regular
    } else {
        ReliabilityTier::Low
    }
}

pub fn classify_consistency(z_probability: Option<f64>) -> ConsistencyBand {
    let Some(probability) = z_probability else {
        return ConsistencyBand::Undefined;
    };
    if probability >= 75.0 {
        ConsistencyBand::High
    } else if probability >= 50.0 {
        ConsistencyBand::Moderate
    } else if probability >= 25.0 {
        ConsistencyBand::Low
    } else {
        ConsistencyBand::VeryLow
    }
}
