//! Error types.

use thiserror::Error;

/// Fixed message shown when the tool is not given exactly one text argument.
pub const USAGE_MESSAGE: &str = "Please input text to generate query.";

/// Failure of a single generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Zero or more than one text argument was supplied.
    #[error("{USAGE_MESSAGE}")]
    Usage,

    /// The chat completion call failed.
    #[error(transparent)]
    Remote(#[from] ClientError),
}

/// Errors raised while calling the chat completion service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("endpoint is not set; export AZURE_OPENAI_API_ENDPOINT")]
    MissingEndpoint,

    #[error("API key is not set; export AZURE_OPENAI_API_KEY")]
    MissingApiKey,

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Transport failure: DNS, TLS, connection reset, undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("service returned no completion choices")]
    EmptyResponse,
}
