//! Store error types.

/// Errors reported by the backing store collaborators.
#[derive(Debug)]
pub enum StoreError {
    /// Failed to reach the store
    Http(String),
    /// Store responded with a non-success HTTP status
    Status(u16),
    /// Response body could not be decoded
    Decode(String),
    /// Store accepted the request but reported failure applying it
    Rejected(String),
    /// Blob upload failed
    Upload(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Http(e) => write!(f, "Store unreachable: {}", e),
            StoreError::Status(code) => write!(f, "Store returned status {}", code),
            StoreError::Decode(e) => write!(f, "Invalid store response: {}", e),
            StoreError::Rejected(reason) => write!(f, "Store rejected the request: {}", reason),
            StoreError::Upload(e) => write!(f, "Image upload failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}
