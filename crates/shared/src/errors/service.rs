use thiserror::Error;

use crate::errors::client::ClientError;
use crate::errors::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Internal error: {0}")]
    Internal(String),
}
