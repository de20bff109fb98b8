use thiserror::Error;

/// All errors generated while building or checking an options tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("unknown palette color: {0}")]
    UnknownColor(String),

    #[error("unknown mining pool id: {0}")]
    UnknownPool(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("cohort group {0} has no members")]
    EmptyGroup(String),

    #[error("malformed option at {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("metric catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
