use thiserror::Error;

/// Why a strict extraction could not produce a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("flag not found: {0}")]
    NotFound(String),

    #[error("flag `{0}` has no value")]
    MissingValue(String),

    #[error("flag `{flag}` expects 2 values, found {found}")]
    MissingTernaryValues { flag: String, found: usize },
}
