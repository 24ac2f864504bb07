use thiserror::Error;

/// Failure classes shared by both remote clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but reported an error of its own.
    #[error("{service} error: {message}")]
    Service {
        service: &'static str,
        message: String,
    },
}
