//! Domain errors callers may want to match on
//!
//! Everything else travels as a plain `anyhow::Error`; these variants can be
//! recovered with `err.downcast_ref::<MetricsError>()`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Arguments that contradict each other
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Team '{team}' not found in organization '{organization}'")]
    TeamNotFound { organization: String, team: String },
}
