use thiserror::Error;

/// Failures that abort a completion request. These point at a broken
/// setup, never at user input.
#[derive(Debug, Error)]
pub enum CompleteError {
    #[error("localcomplete: result order misconfigured: {0}")]
    InvalidOrder(i64),

    #[error("localcomplete: invalid case selector: {0}")]
    InvalidCaseSelector(i64),

    #[error("localcomplete: unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("localcomplete: invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type CompleteResult<T> = Result<T, CompleteError>;
