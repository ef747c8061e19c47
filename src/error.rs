use thiserror::Error;

/// Returned by [`crate::stats::mean`] on a zero-length sequence.
///
/// Engine code never surfaces this: every scoring path checks the
/// observation count first and degrades the affected fields to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot take the mean of an empty observation set")]
pub struct EmptyInputError;

/// Rejected configuration knob, raised at engine construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    #[error("tolerance must be positive and finite, got {0}")]
    Tolerance(f64),

    #[error("{name} threshold ratio must be positive and finite, got {value}")]
    ThresholdRatio { name: &'static str, value: f64 },

    #[error("{name} weight must be non-negative and finite, got {value}")]
    WeightDomain { name: &'static str, value: f64 },

    #[error("score weights must sum to 1.0 within 1e-9, got {0}")]
    WeightSum(f64),

    #[error(
        "breakpoints must be strictly decreasing and at least 1, got {full}/{high}/{moderate}"
    )]
    Breakpoints {
        full: usize,
        high: usize,
        moderate: usize,
    },
}
