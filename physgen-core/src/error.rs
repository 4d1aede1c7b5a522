//! Error taxonomy shared across the Physgen crates

use thiserror::Error;

/// Errors produced by unit lookup, conversion, randomized draws, and
/// generator dispatch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysgenError {
    #[error("Conversion from '{from}' to '{to}' is not supported")]
    UnsupportedConversion { from: String, to: String },

    #[error("Unit '{0}' is not supported")]
    UnsupportedUnit(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid relationship '{0}': must be 'None', 'smaller' or 'larger'")]
    InvalidRelationship(String),

    #[error("Unit '{0}' has no default range and no custom range was given")]
    MissingRange(String),

    #[error("No generator named '{0}' is registered")]
    UnknownGenerator(String),
}

impl PhysgenError {
    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        PhysgenError::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}
