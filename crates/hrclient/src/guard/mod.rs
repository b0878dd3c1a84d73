use tracing::{debug, info, warn};

use crate::domain::response::{Role, UserProfile};
use crate::pipeline::{DynApiClient, RequestSpec};
use crate::session::DynSessionManager;

pub const LOGIN_PAGE: &str = "/";

/// Outcome of gating one protected view.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Authorized(UserProfile),
    Redirect(&'static str),
}

/// Gatekeeper consulted before any protected data is requested. Protected
/// content is only released on `Authorized`, which always carries a
/// profile whose role matched the page's requirement.
pub struct SessionGuard {
    session: DynSessionManager,
    api: DynApiClient,
}

impl SessionGuard {
    pub fn new(session: DynSessionManager, api: DynApiClient) -> Self {
        Self { session, api }
    }

    pub async fn check(&self, required: Role) -> GuardOutcome {
        let session = self.session.current().await;

        if session.access_token.is_none() {
            debug!("No access token, redirecting to login");
            return GuardOutcome::Redirect(LOGIN_PAGE);
        }

        let profile = match session.user {
            Some(user) => user,
            None => match self.fetch_profile().await {
                Some(user) => user,
                None => {
                    warn!("Profile unavailable, ending session");
                    self.clear_session().await;
                    return GuardOutcome::Redirect(LOGIN_PAGE);
                }
            },
        };

        if profile.role != required {
            info!(
                "Role {} cannot view a {} page, redirecting to {}",
                profile.role,
                required,
                profile.role.home_page()
            );
            return GuardOutcome::Redirect(profile.role.home_page());
        }

        GuardOutcome::Authorized(profile)
    }

    async fn fetch_profile(&self) -> Option<UserProfile> {
        match self
            .api
            .execute::<UserProfile>(RequestSpec::get("/auth/me/"))
            .await
        {
            Ok(user) => {
                if let Err(e) = self.session.update_user(user.clone()).await {
                    warn!("Could not cache the fetched profile: {e}");
                }
                Some(user)
            }
            Err(e) => {
                warn!("Who-am-I call failed: {e}");
                None
            }
        }
    }

    async fn clear_session(&self) {
        if let Err(e) = self.session.clear().await {
            warn!("Failed to clear session: {e}");
        }
    }
}
