use thiserror::Error;

use crate::errors::api::TRANSPORT_FAILURE_MESSAGE;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Unauthenticated(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(_error: reqwest::Error) -> Self {
        ClientError::Transport(TRANSPORT_FAILURE_MESSAGE.to_string())
    }
}
