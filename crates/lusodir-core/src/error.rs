use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Search query must be at least {min_len} characters")]
    InvalidQuery { min_len: usize },

    #[error("Invalid coordinates: lat and lng must both be valid numbers")]
    InvalidCoordinates,

    #[error("Failed to search businesses")]
    Upstream(#[source] anyhow::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl Error {
    /// Validation failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidQuery { .. } | Error::InvalidCoordinates)
    }

    /// Message safe to return to callers. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
