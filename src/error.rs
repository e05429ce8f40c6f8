//! Error types for the Planka client.

use thiserror::Error;

/// Errors that can occur when using the Planka client.
#[derive(Debug, Error)]
pub enum Error {
    /// Login was rejected by the server.
    #[error("login failed with HTTP status {status}")]
    Auth {
        /// The HTTP status code returned by the access-token endpoint.
        status: u16,
    },

    /// An authenticated call was made before `login` succeeded.
    #[error("not logged in: call login() first")]
    NotLoggedIn,

    /// A required environment variable is not set or is empty.
    #[error("{0} environment variable is not set")]
    MissingEnv(&'static str),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response from the API.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API returned an error response.
    #[error("API error: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The error message from the API.
        message: String,
    },

    /// A resource was not found.
    #[error("resource not found: {0}")]
    NotFound(String),
}
