use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// Replying and filtering are total and never produce one of these; errors
/// only come from building rule tables, loading catalogs and parsing filter
/// values.
#[derive(Debug, Error)]
pub enum Error {
    /// A keyword rule failed validation (empty or non-lowercase trigger, no triggers).
    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: &'static str, reason: String },

    /// The trigger set could not be compiled.
    #[error("failed to compile rule triggers: {0}")]
    RuleCompile(#[from] regex::Error),

    /// Two catalog entries share the same id.
    #[error("duplicate source id '{0}' in catalog")]
    DuplicateId(String),

    /// A catalog entry carries a negative or non-finite distance.
    #[error("source '{id}' has invalid distance {distance_km}")]
    InvalidDistance { id: String, distance_km: f64 },

    /// A filter value did not name a known variant.
    #[error("unknown {kind} filter '{value}'")]
    UnknownFilter { kind: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
