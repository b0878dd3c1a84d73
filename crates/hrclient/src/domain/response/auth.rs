use serde::{Deserialize, Serialize};

use crate::domain::response::user::UserProfile;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

/// Body of the token exchange. The backend may rotate the refresh token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshResponse {
    pub access: String,
    pub refresh: Option<String>,
}
