use async_trait::async_trait;
use shared::errors::StoreError;
use tokio::sync::RwLock;

use crate::abstract_trait::SessionStoreTrait;
use crate::domain::response::Session;

/// Process-local store for tests and embedders that do not want durability.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.session.write().await = session.clone();
        Ok(())
    }

    async fn load(&self) -> Session {
        self.session.read().await.clone()
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.session.write().await = Session::default();
        Ok(())
    }
}
