//! Error types for roster loading.

use thiserror::Error;

/// Errors raised while parsing or validating a seed roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster JSON is malformed.
    #[error("invalid roster JSON: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// The roster parsed but contains no records.
    #[error("roster contains no records")]
    Empty,

    /// A record is missing a usable name or email.
    #[error("roster record {index} is blank in field '{field}'")]
    BlankField {
        /// Zero-based index of the offending record.
        index: usize,
        /// Name of the blank field.
        field: &'static str,
    },
}
