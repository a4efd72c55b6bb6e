//! Error types for semaforo.

/// Result type alias for semaforo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing dataset providers.
///
/// The render pipeline itself is infallible: degenerate inputs resolve
/// to placeholder outputs or plain-text cells, never errors. Only the
/// Arrow adapter has a fallible construction path.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Schema mismatch between record batches.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch {
        /// Description of the schema mismatch.
        message: String,
    },
}

impl Error {
    /// Create a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }
}
