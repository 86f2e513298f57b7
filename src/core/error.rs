use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum WbError {
    /// An error occurred during an HTTP request (connect, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON, or its shape did not match the product card.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl WbError {
    /// Returns `true` if the request did not complete because of a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
