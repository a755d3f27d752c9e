/// Errors that can occur while constructing a validator.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// The schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// The schema document is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
