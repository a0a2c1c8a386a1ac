use thiserror::Error;

#[derive(Debug, Error)]
pub enum CosmicError {
    #[error("missing profile data: {0}")]
    MissingProfileData(String),

    #[error("derivation `{derivation}` failed: {reason}")]
    DerivationFailure { derivation: String, reason: String },

    #[error("pattern store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("retrieval service failure: {0}")]
    RetrievalServiceFailure(String),

    #[error("{operation} timed out after {millis}ms")]
    Timeout { operation: String, millis: u64 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl CosmicError {
    pub fn derivation(derivation: &str, reason: impl ToString) -> Self {
        CosmicError::DerivationFailure {
            derivation: derivation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn store(err: impl std::fmt::Display) -> Self {
        CosmicError::StoreUnavailable(err.to_string())
    }

    pub fn retrieval(err: impl std::fmt::Display) -> Self {
        CosmicError::RetrievalServiceFailure(err.to_string())
    }
}

pub type CosmicResult<T> = Result<T, CosmicError>;
