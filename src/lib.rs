//! Deterministic reliability scoring for crop hybrid yield observations.
//!
//! Turns each hybrid's yield history into a bounded trust score by
//! combining a normal-model consistency probability, a cohort success
//! rate, a self-relative frustration risk, and a sample-size confidence
//! discount, then classifies the score into a tier. Degenerate inputs
//! (no observations, a single observation, zero mean) surface as `None`
//! fields on the output record, never as errors or NaN: the only
//! failure paths in the crate are [`stats::mean`] on an empty slice and
//! an out-of-domain [`EngineConfig`] at construction.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use hybrid_reliability::{EngineConfig, ReliabilityTier, ScoringEngine};
//!
//! let engine = ScoringEngine::new(EngineConfig::default_v1()).unwrap();
//! let mut observations = BTreeMap::new();
//! observations.insert("H-101".to_string(), vec![8100.0, 9000.0, 9900.0]);
//! observations.insert("H-205".to_string(), vec![9000.0; 4]);
//!
//! let ids: Vec<String> = observations.keys().cloned().collect();
//! let records = engine.run(&ids, &observations);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].tier, ReliabilityTier::Excellent);
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod quality;
pub mod stats;

pub use engine::{ScoringEngine, describe, reference_mean, sort_for_ranking};
pub use error::{EmptyInputError, InvalidParameterError};
pub use model::config::{ConfidenceBreakpoints, EngineConfig, ScoreWeights};
pub use model::record::{
    CohortSummary, ConsistencyRecord, DescriptiveStats, HybridRecord, TierCounts,
};
pub use model::tier::{ConsistencyBand, ReliabilityTier};
pub use quality::{OutlierSummary, iqr_outliers};
