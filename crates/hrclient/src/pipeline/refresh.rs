use reqwest::Client;
use shared::errors::{ClientError, extract_api_message};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::response::RefreshResponse;
use crate::session::DynSessionManager;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Exchanges the refresh token for a new access token, with at most one
/// exchange in flight. A request that loses the race re-reads the session
/// after acquiring the guard and reuses the winner's renewal instead of
/// spending a second exchange on an already-superseded refresh token.
pub struct RefreshCoordinator {
    http: Client,
    refresh_url: String,
    session: DynSessionManager,
    inflight: Mutex<()>,
}

impl RefreshCoordinator {
    pub fn new(http: Client, base_url: &str, session: DynSessionManager) -> Self {
        Self {
            http,
            refresh_url: format!("{base_url}/auth/token/refresh/"),
            session,
            inflight: Mutex::new(()),
        }
    }

    /// Renews the access token. `Ok` means a fresh token is installed in the
    /// session; an `Unauthenticated` error means the session has been
    /// cleared and the caller's request ends as an authentication failure.
    pub async fn renew(&self) -> Result<(), ClientError> {
        let observed = self.session.access_token().await;

        let _guard = self.inflight.lock().await;

        if self.session.access_token().await != observed {
            debug!("Access token already renewed by a concurrent request");
            return Ok(());
        }

        let Some(refresh_token) = self.session.refresh_token().await else {
            warn!("No refresh token available, ending session");
            self.clear_session().await;
            return Err(ClientError::Unauthenticated(
                SESSION_EXPIRED_MESSAGE.to_string(),
            ));
        };

        // The exchange goes through the bare client, never the pipeline,
        // so a 401 here cannot recurse into another renewal.
        let response = match self
            .http
            .post(&self.refresh_url)
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // The token was never judged by the backend; keep the
                // session so a later request can try again.
                error!("Token refresh transport failure: {e}");
                return Err(ClientError::from(e));
            }
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.bytes().await.unwrap_or_default();
            let message = extract_api_message(&body);
            warn!("Token refresh rejected with status {status}: {message}");
            self.clear_session().await;
            return Err(ClientError::Unauthenticated(message));
        }

        let renewed: RefreshResponse = response.json().await.map_err(ClientError::from)?;
        self.session
            .update_tokens(renewed.access, renewed.refresh)
            .await
            .map_err(|e| {
                error!("Failed to persist renewed tokens: {e}");
                ClientError::Unauthenticated(SESSION_EXPIRED_MESSAGE.to_string())
            })?;

        info!("Access token renewed");
        Ok(())
    }

    async fn clear_session(&self) {
        if let Err(e) = self.session.clear().await {
            error!("Failed to clear session: {e}");
        }
    }
}
