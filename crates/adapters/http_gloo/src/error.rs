//! HTTP adapter error types.

use firewatch_domain::error::FetchError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed")]
    Gloo(#[from] gloo_net::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason phrase, possibly empty.
        status_text: String,
    },
}

impl HttpError {
    /// Convert into the domain [`FetchError`] for propagation across the port
    /// boundary.
    #[must_use]
    pub fn into_domain(self) -> FetchError {
        match self {
            Self::Gloo(gloo_net::Error::SerdeError(err)) => FetchError::decode(err),
            Self::Gloo(err) => FetchError::transport(err),
            Self::Status {
                status,
                status_text,
            } => FetchError::status(status, &status_text),
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
