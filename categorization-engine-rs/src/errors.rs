// categorization-engine-rs/src/errors.rs
// Error types for ticket parsing

use thiserror::Error;

/// Error returned when a severity string is not one of the four known levels.
///
/// Only the validation boundary ever produces this; a constructed
/// [`Severity`](crate::Severity) is always one of the valid levels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("must be one of critical, high, medium, low (got '{0}')")]
pub struct SeverityParseError(pub String);
