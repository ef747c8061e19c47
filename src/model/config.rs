use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;

/// Permitted drift of the weight sum away from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to the four score components. Must sum to 1.0; a
/// missing component never triggers renormalization, it makes the
/// whole score undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub z_probability: f64,
    pub success_rate: f64,
    pub frustration_inverse: f64,
    pub confidence: f64,
}

/// Sample-size steps for the confidence factor. `full` and above maps
/// to 100, `high` to 80, `moderate` to 60, anything below to 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBreakpoints {
    pub full: usize,
    pub high: usize,
    pub moderate: usize,
}

/// All scoring knobs as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub tolerance: f64,
    pub success_threshold_ratio: f64,
    pub frustration_threshold_ratio: f64,
    pub weights: ScoreWeights,
    pub confidence_breakpoints: ConfidenceBreakpoints,
}

impl EngineConfig {
    pub fn default_v1() -> Self {
        Self {
            tolerance: 0.10,
            success_threshold_ratio: 0.80,
            frustration_threshold_ratio: 0.80,
            weights: ScoreWeights {
                z_probability: 0.35,
                success_rate: 0.35,
                frustration_inverse: 0.20,
                confidence: 0.10,
            },
            confidence_breakpoints: ConfidenceBreakpoints {
                full: 20,
                high: 10,
                moderate: 5,
            },
        }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(InvalidParameterError::Tolerance(self.tolerance));
        }
        for (name, value) in [
            ("success", self.success_threshold_ratio),
            ("frustration", self.frustration_threshold_ratio),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(InvalidParameterError::ThresholdRatio { name, value });
            }
        }

        let w = self.weights;
        for (name, value) in [
            ("z_probability", w.z_probability),
            ("success_rate", w.success_rate),
            ("frustration_inverse", w.frustration_inverse),
            ("confidence", w.confidence),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(InvalidParameterError::WeightDomain { name, value });
            }
        }
        let sum = w.z_probability + w.success_rate + w.frustration_inverse + w.confidence;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(InvalidParameterError::WeightSum(sum));
        }

        let bp = self.confidence_breakpoints;
        if bp.moderate < 1 || bp.high <= bp.moderate || bp.full <= bp.high {
            return Err(InvalidParameterError::Breakpoints {
                full: bp.full,
                high: bp.high,
                moderate: bp.moderate,
            });
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}
