use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Contention: {0}")]
    Contention(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),
}

impl CacheError {
    /// True for failures raised before the backend was contacted (breaker open,
    /// timeout, failed reconnection probe).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CacheError::BackendUnavailable(_))
    }

    /// False for failures caused by the request itself (oversized key, rejected
    /// command, undecodable value). Only the rest feed the circuit breaker.
    pub fn counts_toward_breaker(&self) -> bool {
        match self {
            CacheError::SerializationError(_) | CacheError::Contention(_) => false,
            CacheError::MemcacheError(
                memcache::MemcacheError::ClientError(_) | memcache::MemcacheError::CommandError(_),
            ) => false,
            CacheError::RedisError(e) => !matches!(
                e.kind(),
                redis::ErrorKind::UnexpectedReturnType | redis::ErrorKind::Client | redis::ErrorKind::InvalidClientConfig
            ),
            _ => true,
        }
    }
}
