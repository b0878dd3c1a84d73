use async_trait::async_trait;
use shared::errors::StoreError;
use std::sync::Arc;

use crate::domain::response::Session;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

/// Durable persistence for the session. `load` never fails: unreadable or
/// inconsistent persisted data is reported as an empty session.
#[async_trait]
pub trait SessionStoreTrait {
    async fn save(&self, session: &Session) -> Result<(), StoreError>;
    async fn load(&self) -> Session;
    async fn clear(&self) -> Result<(), StoreError>;
}
