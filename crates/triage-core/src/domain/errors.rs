//! Errors raised while turning outside input into domain values.
//!
//! Routing itself has no error path: an unresolvable request is answered
//! with the rejection string. These only cover parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown request category: {0:?}")]
pub struct ParseCategoryError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("id {value:?} does not start with {prefix:?}")]
    MissingPrefix { value: String, prefix: &'static str },

    #[error("invalid ulid in id {value:?}: {reason}")]
    InvalidUlid { value: String, reason: String },
}
