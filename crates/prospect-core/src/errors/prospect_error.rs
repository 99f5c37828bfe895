use super::{ConfigError, OracleError, StorageError};

/// Top-level error type for the Prospect workspace.
#[derive(Debug, thiserror::Error)]
pub enum ProspectError {
    #[error("hypothesis not found: {id}")]
    HypothesisNotFound { id: String },

    #[error("no hypothesis state for entity {entity_id}, category {category}")]
    StateNotFound { entity_id: String, category: String },

    #[error("invalid decision: {value}")]
    InvalidDecision { value: String },

    #[error("invalid hop type: {value}")]
    InvalidHopType { value: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("oracle error: {0}")]
    OracleError(#[from] OracleError),

    #[error("retrieval error: {reason}")]
    RetrievalError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl ProspectError {
    /// Whether the caller may retry the failed operation unchanged.
    ///
    /// Durability writes and worker-pool failures are transient; everything else
    /// reflects bad input or bad configuration.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProspectError::StorageError(_) | ProspectError::ConcurrencyError(_)
        )
    }
}

pub type ProspectResult<T> = Result<T, ProspectError>;
