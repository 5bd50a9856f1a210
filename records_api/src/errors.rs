//! Error types for the Records API client.

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or API key is missing or malformed. Raised at startup,
    /// never mid-request.
    #[error("configuration error: {0}")]
    Config(String),
    /// The request never produced a response: DNS failure, refused
    /// connection, or timeout.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected page shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}
