//! Errors for the fallible parts of the API.
//!
//! Validation failures are never reported here; they live on the controls as
//! [`ValidationErrors`](crate::validation::ValidationErrors).
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern { pattern: String, source: regex::Error },
    #[error("no control found at path '{path}'")]
    PathNotFound { path: String },
    #[error("form value does not match the requested type: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("patch value could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}
