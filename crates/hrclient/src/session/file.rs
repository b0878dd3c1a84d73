use async_trait::async_trait;
use shared::errors::StoreError;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error, warn};

use crate::abstract_trait::SessionStoreTrait;
use crate::domain::response::Session;

/// Persists the session as one JSON document. Writes go through a sibling
/// temp file and a rename, so a reader never observes a torn session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStoreTrait for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!("Session persisted to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Session {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Session::default(),
            Err(e) => {
                error!("Failed to read session file {}: {e}", self.path.display());
                return Session::default();
            }
        };

        match serde_json::from_slice::<Session>(&bytes) {
            Ok(session) if session.is_well_formed() => session,
            Ok(_) => {
                warn!("Stored session has a token without its user, treating as logged out");
                Session::default()
            }
            Err(e) => {
                warn!("Stored session is unreadable, treating as logged out: {e}");
                Session::default()
            }
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
