use shared::errors::StoreError;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

use crate::abstract_trait::DynSessionStore;
use crate::domain::response::{Session, UserProfile};

pub type DynSessionManager = Arc<SessionManager>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Saved,
    /// Session destroyed; subscribers should navigate back to the login page.
    Cleared,
}

/// Single source of truth for the session. The authoritative copy lives
/// behind an async lock; every save or clear persists to the backing store
/// before becoming visible, so no reader ever observes a torn session.
pub struct SessionManager {
    store: DynSessionStore,
    current: RwLock<Session>,
    events: watch::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new(store: DynSessionStore) -> Self {
        let (events, _) = watch::channel(SessionEvent::Started);
        Self {
            store,
            current: RwLock::new(Session::default()),
            events,
        }
    }

    /// Hydrates the in-memory session from the backing store. Called once
    /// at startup, before any request is issued.
    pub async fn init(&self) {
        let session = self.store.load().await;
        let authenticated = session.is_authenticated();
        *self.current.write().await = session;
        debug!("Session hydrated, authenticated: {authenticated}");
    }

    pub async fn current(&self) -> Session {
        self.current.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.current.read().await.access_token.clone()
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.current.read().await.refresh_token.clone()
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.current.read().await.user.clone()
    }

    /// Replaces the whole session, as on login.
    pub async fn save(&self, session: Session) -> Result<(), StoreError> {
        let mut current = self.current.write().await;
        self.store.save(&session).await?;
        *current = session;
        self.events.send_replace(SessionEvent::Saved);
        Ok(())
    }

    /// Installs a renewed access token (and the rotated refresh token when
    /// the backend supplies one), leaving the cached user untouched.
    pub async fn update_tokens(
        &self,
        access: String,
        refresh: Option<String>,
    ) -> Result<(), StoreError> {
        let mut current = self.current.write().await;
        let mut next = current.clone();
        next.access_token = Some(access);
        if let Some(refresh) = refresh {
            next.refresh_token = Some(refresh);
        }
        self.store.save(&next).await?;
        *current = next;
        self.events.send_replace(SessionEvent::Saved);
        Ok(())
    }

    /// Replaces the cached profile wholesale, as after a profile update.
    pub async fn update_user(&self, user: UserProfile) -> Result<(), StoreError> {
        let mut current = self.current.write().await;
        let mut next = current.clone();
        next.user = Some(user);
        self.store.save(&next).await?;
        *current = next;
        self.events.send_replace(SessionEvent::Saved);
        Ok(())
    }

    /// Destroys the session in memory and in the store, then signals the
    /// navigation-to-login effect to subscribers.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut current = self.current.write().await;
        self.store.clear().await?;
        *current = Session::default();
        self.events.send_replace(SessionEvent::Cleared);
        info!("Session cleared");
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
