//! Error types for the valuation pipeline.

use thiserror::Error;

/// Rejection of a single user-supplied attribute.
///
/// Recoverable: the caller shows the message and asks again. The fitted
/// pipeline is never touched by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a value for {feature}")]
    Missing { feature: &'static str },

    #[error("Please enter a value for {feature}")]
    Empty { feature: &'static str },

    #[error("Please enter a valid number for {feature}")]
    NotNumeric { feature: &'static str },

    #[error("{feature} cannot be negative")]
    Negative { feature: &'static str },
}

impl ValidationError {
    /// Name of the offending feature
    pub fn feature(&self) -> &'static str {
        match self {
            ValidationError::Missing { feature }
            | ValidationError::Empty { feature }
            | ValidationError::NotNumeric { feature }
            | ValidationError::Negative { feature } => feature,
        }
    }
}

/// Failures while building the pipeline or moving data across its boundaries.
///
/// None of these are user-recoverable; they are raised before the pipeline
/// can serve a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Column {feature} has zero variance; standardization is undefined")]
    NumericalDegeneracy { feature: &'static str },

    #[error("Dimension mismatch in {context}: expected {expected} components, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Least squares system could not be solved: {0}")]
    SingularSystem(String),

    #[error("Insufficient data: need at least {needed} training rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Test fraction must lie in [0, 1), got {0}")]
    InvalidSplit(f64),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
