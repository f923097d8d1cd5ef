use thiserror::Error;

/// Errors raised by the catalog store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog file could not be read or written
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file exists but does not hold a valid course array
    #[error("catalog file is not a valid course array: {0}")]
    Parse(#[from] serde_json::Error),
}
