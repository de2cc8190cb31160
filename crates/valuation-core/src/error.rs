use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    /// Missing, malformed, or out-of-range input. Always recoverable by the
    /// caller correcting the named field.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// A failure in the valuation arithmetic itself. Should not occur for
    /// validated input.
    #[error("Computation error: {0}")]
    Computation(String),
}

impl ValuationError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Machine-distinguishable error kind for the response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            ValuationError::Validation { .. } => "validation_error",
            ValuationError::Computation(_) => "internal_error",
        }
    }

    /// The offending field, for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValuationError::Validation { field, .. } => Some(field),
            ValuationError::Computation(_) => None,
        }
    }
}
