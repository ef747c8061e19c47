pub mod metrics;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::error::InvalidParameterError;
use crate::model::config::EngineConfig;
use crate::model::record::{
    CohortSummary, ConsistencyRecord, DescriptiveStats, HybridRecord, TierCounts,
};
use crate::model::tier::ReliabilityTier;
use crate::stats;

/// Stateless scoring engine: holds nothing but a validated
/// configuration, all data arrives per call.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    /// Validates every knob eagerly; a misconfigured engine is never
    /// constructed.
    pub fn new(config: EngineConfig) -> Result<Self, InvalidParameterError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default_v1(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores every requested hybrid against the cohort formed by the
    /// request itself: the reference mean is taken over the union of
    /// the named hybrids' observations, then each hybrid is scored
    /// independently. Returns one record per distinct requested id, in
    /// request order, unsorted. Ids absent from the map score as empty
    /// observation sets; duplicate ids are scored once.
    pub fn run(
        &self,
        hybrid_ids: &[String],
        observations_by_hybrid: &BTreeMap<String, Vec<f64>>,
    ) -> Vec<HybridRecord> {
        let reference = reference_mean(hybrid_ids, observations_by_hybrid);
        debug!(
            hybrids = hybrid_ids.len(),
            reference_mean = ?reference,
            "scoring cohort"
        );

        let mut seen = BTreeSet::new();
        let mut records = Vec::with_capacity(hybrid_ids.len());
        for id in hybrid_ids {
            if !seen.insert(id.as_str()) {
                warn!(hybrid_id = %id, "duplicate hybrid id in request; keeping first");
                continue;
            }
            let observations = observations_by_hybrid
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let record = self.score_hybrid(id, observations, reference);
            if record.score.is_none() {
                debug!(
                    hybrid_id = %id,
                    observations = record.observation_count,
                    "insufficient data; record left unscored"
                );
            }
            records.push(record);
        }
        records
    }

    /// One record from one observation sequence. Degenerate inputs
    /// degrade field by field, never abort.
    pub fn score_hybrid(
        &self,
        hybrid_id: &str,
        observations: &[f64],
        reference_mean: Option<f64>,
    ) -> HybridRecord {
        let config = &self.config;
        let mean = stats::mean(observations).ok();
        let std_dev = stats::sample_std_dev(observations);
        let coefficient_of_variation = match (mean, std_dev) {
            (Some(m), Some(s)) => stats::coefficient_of_variation(m, s),
            _ => None,
        };

        let z_probability = metrics::z_probability(observations, config.tolerance);
        let success_rate = reference_mean.and_then(|reference| {
            metrics::success_rate(observations, reference, config.success_threshold_ratio)
        });
        let frustration_risk =
            metrics::frustration_risk(observations, config.frustration_threshold_ratio);
        let score = metrics::composite_score(
            z_probability,
            success_rate,
            frustration_risk,
            observations.len(),
            &config.weights,
            &config.confidence_breakpoints,
        );
        let tier = metrics::classify(score);

        HybridRecord {
            hybrid_id: hybrid_id.to_string(),
            observation_count: observations.len(),
            mean,
            std_dev,
            coefficient_of_variation,
            z_probability,
            success_rate,
            frustration_risk,
            score,
            tier,
        }
    }

    /// Consistency view of the cohort: the z probability and its
    /// dispersion context per hybrid, banded without the composite
    /// score. Single-observation hybrids appear with an undefined
    /// probability rather than being dropped.
    pub fn consistency_report(
        &self,
        hybrid_ids: &[String],
        observations_by_hybrid: &BTreeMap<String, Vec<f64>>,
    ) -> Vec<ConsistencyRecord> {
        let mut seen = BTreeSet::new();
        let mut records = Vec::with_capacity(hybrid_ids.len());
        for id in hybrid_ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            let observations = observations_by_hybrid
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let mean = stats::mean(observations).ok();
            let std_dev = stats::sample_std_dev(observations);
            let coefficient_of_variation = match (mean, std_dev) {
                (Some(m), Some(s)) => stats::coefficient_of_variation(m, s),
                _ => None,
            };
            let z_probability = metrics::z_probability(observations, self.config.tolerance);

            records.push(ConsistencyRecord {
                hybrid_id: id.clone(),
                observation_count: observations.len(),
                mean,
                std_dev,
                coefficient_of_variation,
                z_probability,
                band: metrics::classify_consistency(z_probability),
            });
        }
        records
    }

    /// Rolls a finished run up into tier counts and metric means.
    /// Pass the same reference mean the run used so the summary can
    /// show the derived success threshold.
    pub fn summarize(
        &self,
        records: &[HybridRecord],
        reference_mean: Option<f64>,
    ) -> CohortSummary {
        let mut tier_counts = TierCounts::default();
        for record in records {
            match record.tier {
                ReliabilityTier::Excellent => tier_counts.excellent += 1,
                ReliabilityTier::Good => tier_counts.good += 1,
                ReliabilityTier::Regular => tier_counts.regular += 1,
                ReliabilityTier::Low => tier_counts.low += 1,
                ReliabilityTier::Undefined => tier_counts.undefined += 1,
            }
        }

        CohortSummary {
            total: records.len(),
            scored: records.iter().filter(|r| r.score.is_some()).count(),
            tier_counts,
            mean_score: mean_of_defined(records, |r| r.score),
            mean_z_probability: mean_of_defined(records, |r| r.z_probability),
            mean_success_rate: mean_of_defined(records, |r| r.success_rate),
            mean_frustration_risk: mean_of_defined(records, |r| r.frustration_risk),
            reference_mean,
            success_threshold: reference_mean.map(|m| m * self.config.success_threshold_ratio),
        }
    }
}

/// Population mean over the union of the named hybrids' observation
/// sets. Duplicate ids contribute once. `None` when the union is empty.
pub fn reference_mean(
    hybrid_ids: &[String],
    observations_by_hybrid: &BTreeMap<String, Vec<f64>>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut seen = BTreeSet::new();
    for id in hybrid_ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        if let Some(values) = observations_by_hybrid.get(id) {
            sum += values.iter().sum::<f64>();
            count += values.len();
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Canonical ranking order: score descending, ties and undefined
/// scores broken by hybrid_id ascending, undefined scores last.
pub fn sort_for_ranking(records: &mut [HybridRecord]) {
    records.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y
            .partial_cmp(&x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.hybrid_id.cmp(&b.hybrid_id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.hybrid_id.cmp(&b.hybrid_id),
    });
}

/// Order statistics for one observation sequence. Total over any
/// input: an empty sequence yields a zero-count row of `None`s.
pub fn describe(values: &[f64]) -> DescriptiveStats {
    let mean = stats::mean(values).ok();
    let std_dev = stats::sample_std_dev(values);
    DescriptiveStats {
        observation_count: values.len(),
        mean,
        median: stats::median(values),
        std_dev,
        min: stats::min_value(values),
        max: stats::max_value(values),
        coefficient_of_variation: match (mean, std_dev) {
            (Some(m), Some(s)) => stats::coefficient_of_variation(m, s),
            _ => None,
        },
    }
}

fn mean_of_defined(
    records: &[HybridRecord],
    field: impl Fn(&HybridRecord) -> Option<f64>,
) -> Option<f64> {
    let defined: Vec<f64> = records.iter().filter_map(field).collect();
    stats::mean(&defined).ok()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/run.rs"]
mod tests;
