use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session encoding error: {0}")]
    Serialize(#[from] serde_json::Error),
}
