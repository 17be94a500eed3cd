//! Error types for the ghost crate

use thiserror::Error;

use crate::types::Outcome;

/// Main error type for the ghost crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("empty word")]
    EmptyWord,

    #[error("invalid character '{character}' at position {position} in '{word}'")]
    InvalidLetter {
        character: char,
        position: usize,
        word: String,
    },

    #[error("no word in the dictionary continues the prefix '{prefix}'")]
    PrefixNotFound { prefix: String },

    #[error("no forced win to extract from this prefix (mover outcome: {outcome})")]
    NoForcedWin { outcome: Outcome },

    #[error("outcomes have not been propagated yet")]
    NotPropagated,

    #[error("outcomes already propagated; the dictionary is sealed")]
    AlreadyPropagated,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
