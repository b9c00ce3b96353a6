use thiserror::Error;

/// Failures surfaced by the remote catalog client.
///
/// `Cancelled` is not a genuine failure: it marks a request superseded by
/// newer intent (or session teardown) and must never be read as "no
/// results". The orchestrator swallows it before it reaches the store.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("malformed upstream response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl CatalogError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogError::Cancelled)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Network(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
