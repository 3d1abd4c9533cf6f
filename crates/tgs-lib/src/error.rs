use thiserror::Error;

use crate::validation::ValidationError;

/// Convenient result alias for the TGS library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A record in the response failed conversion.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured API endpoint is not a usable base URL.
    #[error("invalid API endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// The API answered with something other than `200 OK`.
    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be parsed as JSON.
    #[error("failed to parse JSON response from {url}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed response body was `null`.
    #[error("JSON data cannot be None")]
    MissingPayload,

    /// The response body had no usable `data` property.
    #[error("No 'data' property found in JSON data")]
    MissingData,

    /// A list endpoint returned a `data` property that is not an array.
    #[error("'data' property must be an array")]
    DataNotArray,

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True when the failure came from the upstream payload rather than transport.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
