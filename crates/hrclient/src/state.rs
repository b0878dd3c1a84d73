use std::sync::Arc;

use anyhow::{Context, Result};
use shared::config::Config;
use tracing::info;

use crate::{
    abstract_trait::DynSessionStore,
    di::DependenciesInject,
    guard::SessionGuard,
    pipeline::{ApiClient, DynApiClient},
    session::{DynSessionManager, FileSessionStore, SessionManager},
};

#[derive(Clone)]
pub struct AppState {
    pub session: DynSessionManager,
    pub guard: Arc<SessionGuard>,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        info!(
            "Loading session from {}",
            config.storage.session_file.display()
        );
        let store: DynSessionStore =
            Arc::new(FileSessionStore::new(config.storage.session_file.clone()));
        let session: DynSessionManager = Arc::new(SessionManager::new(store));
        session.init().await;

        let api: DynApiClient = Arc::new(
            ApiClient::new(&config.api, session.clone())
                .context("Failed to build the HTTP client")?,
        );

        let guard = Arc::new(SessionGuard::new(session.clone(), api.clone()));

        let di_container = DependenciesInject::new(api, session.clone());

        Ok(Self {
            session,
            guard,
            di_container,
        })
    }
}
