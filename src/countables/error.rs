use thiserror::Error;

/// Why an `add` or `rename` was refused.
///
/// The store's boolean API collapses all of these into `false`; the typed
/// `try_*` variants keep them apart so callers can pick a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("A countable named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("No countable named \"{0}\"")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum CountablesError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Index {index} is out of bounds ({len} countables)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Count of \"{name}\" cannot go below zero ({count} {delta:+})")]
    NegativeCount { name: String, count: u64, delta: i64 },

    #[error("Count of \"{name}\" is too large")]
    CountOverflow { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Paths error: {0}")]
    Paths(String),
}

pub type Result<T> = std::result::Result<T, CountablesError>;
