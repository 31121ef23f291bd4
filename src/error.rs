//! Error handling for the vertex cache optimizer
//!
//! Precondition failures are reported before the caller's buffer is touched.
//! Invariant violations mean the incidence graph bookkeeping is broken; they are
//! returned as errors so a caller never receives a partially reordered buffer.

/// Main error type for the optimizer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizerError {
    #[error("Index count {count} is not a multiple of 3")]
    InvalidIndexCount { count: usize },

    #[error("Index range {offset}..{offset}+{len} is out of bounds for buffer of length {buffer_len}")]
    RangeOutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invariant violated during {stage}: {reason}")]
    InvariantViolation { stage: &'static str, reason: String },
}

/// Type alias for Results in the optimizer
pub type OptimizerResult<T> = Result<T, OptimizerError>;

impl OptimizerError {
    pub(crate) fn invariant(stage: &'static str, reason: impl Into<String>) -> Self {
        OptimizerError::InvariantViolation {
            stage,
            reason: reason.into(),
        }
    }

    /// True for errors caused by broken internal bookkeeping rather than bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, OptimizerError::InvariantViolation { .. })
    }
}

/// Convert Option to Result with an invariant error
pub trait OptionExt<T> {
    fn ok_or_invariant<F>(self, stage: &'static str, reason: F) -> OptimizerResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_invariant<F>(self, stage: &'static str, reason: F) -> OptimizerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| OptimizerError::invariant(stage, reason()))
    }
}
