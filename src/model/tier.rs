use std::fmt;

use serde::{Deserialize, Serialize};

/// Reliability tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliabilityTier {
    Excellent,
    Good,
    Regular,
    Low,
    Undefined,
}

impl ReliabilityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ReliabilityTier::Excellent => "Excellent",
            ReliabilityTier::Good => "Good",
            ReliabilityTier::Regular => "Regular",
            ReliabilityTier::Low => "Low",
            ReliabilityTier::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for ReliabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consistency band derived from the z probability alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyBand {
    High,
    Moderate,
    Low,
    VeryLow,
    Undefined,
}

impl ConsistencyBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsistencyBand::High => "High",
            ConsistencyBand::Moderate => "Moderate",
            ConsistencyBand::Low => "Low",
            ConsistencyBand::VeryLow => "Very Low",
            ConsistencyBand::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for ConsistencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
