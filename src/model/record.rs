use serde::{Deserialize, Serialize};

use crate::model::tier::{ConsistencyBand, ReliabilityTier};

/// Per-hybrid scoring result. A `None` metric means the input was too
/// degenerate for that field (see the count rules on each one); the
/// record itself always exists for every requested hybrid id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridRecord {
    pub hybrid_id: String,
    pub observation_count: usize,
    /// `None` when observation_count = 0.
    pub mean: Option<f64>,
    /// Sample std dev. `None` when observation_count < 2.
    pub std_dev: Option<f64>,
    /// `None` when std_dev is undefined or the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// `None` when observation_count < 2.
    pub z_probability: Option<f64>,
    /// `None` when observation_count = 0 or the reference mean is undefined.
    pub success_rate: Option<f64>,
    /// `None` when observation_count = 0.
    pub frustration_risk: Option<f64>,
    /// `None` unless every weighted component is defined.
    pub score: Option<f64>,
    pub tier: ReliabilityTier,
}

/// Order statistics for one observation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub observation_count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub coefficient_of_variation: Option<f64>,
}

/// Per-hybrid consistency row: the z probability with its dispersion
/// context, classified into a band without the full composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyRecord {
    pub hybrid_id: String,
    pub observation_count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub coefficient_of_variation: Option<f64>,
    pub z_probability: Option<f64>,
    pub band: ConsistencyBand,
}

/// Tier histogram over one scored cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub excellent: usize,
    pub good: usize,
    pub regular: usize,
    pub low: usize,
    pub undefined: usize,
}

/// Cohort roll-up of a scoring run. Metric means are taken over the
/// records where the metric is defined; `None` when no record defines it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub total: usize,
    /// Records with a defined score.
    pub scored: usize,
    pub tier_counts: TierCounts,
    pub mean_score: Option<f64>,
    pub mean_z_probability: Option<f64>,
    pub mean_success_rate: Option<f64>,
    pub mean_frustration_risk: Option<f64>,
    /// Population mean over the cohort's observation union.
    pub reference_mean: Option<f64>,
    /// reference_mean x success_threshold_ratio.
    pub success_threshold: Option<f64>,
}
