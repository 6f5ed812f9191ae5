use thiserror::Error;

use notecraft_core::error::CoreError;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoreError),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no text")]
    EmptyResponse,
}
