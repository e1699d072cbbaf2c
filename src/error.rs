use thiserror::Error;

/// Errors raised by the reasoning core.
///
/// A failed unification or an unmatched query is not an error; those come
/// back as `None` / `false` through the normal return path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{operation} aborted after exceeding its limit of {limit}")]
    Aborted { operation: &'static str, limit: usize },
}

pub type Result<T, E = LogicError> = std::result::Result<T, E>;
