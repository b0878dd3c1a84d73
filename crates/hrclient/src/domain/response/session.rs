use serde::{Deserialize, Serialize};

use crate::domain::response::auth::TokenPair;
use crate::domain::response::user::UserProfile;

/// Client-held authenticated state: the token pair plus the cached profile.
/// An access token is only ever stored together with its user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn authenticated(user: UserProfile, tokens: TokenPair) -> Self {
        Self {
            access_token: Some(tokens.access),
            refresh_token: Some(tokens.refresh),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.user.is_none()
    }

    /// A stored access token without its user is unusable state.
    pub fn is_well_formed(&self) -> bool {
        self.access_token.is_none() || self.user.is_some()
    }
}
