use thiserror::Error;

/// Errors that can occur when building a filter from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("--level must be one of INFO, WARN, ERROR (got: {0})")]
    InvalidLevel(String),
}
