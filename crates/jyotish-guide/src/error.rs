use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Generation failures. Callers collapse all of them into a fallback.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no generation provider configured")]
    Unavailable,

    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned empty content")]
    EmptyResponse,

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message is required")]
    EmptyMessage,

    #[error("chat history storage failed: {0}")]
    Storage(#[source] BoxError),
}

impl ChatError {
    pub(crate) fn storage(err: impl Into<BoxError>) -> Self {
        ChatError::Storage(err.into())
    }
}
