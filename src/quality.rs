//! Observation quality checks that run before scoring is trusted.

use serde::{Deserialize, Serialize};

use crate::stats;

/// Tukey fence multiplier on the interquartile range.
pub const IQR_WHISKER: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Observations strictly below the lower fence.
    pub below: usize,
    /// Observations strictly above the upper fence.
    pub above: usize,
    pub total: usize,
    pub outlier_percent: f64,
}

/// Flags observations outside the Tukey fences, Q1 - 1.5 IQR and
/// Q3 + 1.5 IQR. `None` on an empty sequence.
pub fn iqr_outliers(values: &[f64]) -> Option<OutlierSummary> {
    let q1 = stats::quantile(values, 0.25)?;
    let q3 = stats::quantile(values, 0.75)?;
    let iqr = q3 - q1;
    let lower_bound = q1 - IQR_WHISKER * iqr;
    let upper_bound = q3 + IQR_WHISKER * iqr;

    let below = values.iter().filter(|&&v| v < lower_bound).count();
    let above = values.iter().filter(|&&v| v > upper_bound).count();
    let total = below + above;

    Some(OutlierSummary {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        below,
        above,
        total,
        outlier_percent: total as f64 / values.len() as f64 * 100.0,
    })
}
