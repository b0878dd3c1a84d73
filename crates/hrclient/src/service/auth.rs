use async_trait::async_trait;
use shared::errors::ServiceError;
use shared::utils::format_validation_errors;
use tracing::{error, info};
use validator::Validate;

use crate::abstract_trait::AuthServiceTrait;
use crate::domain::requests::{LoginRequest, UpdateProfileRequest};
use crate::domain::response::{LoginResponse, Session, UserProfile};
use crate::pipeline::{DynApiClient, RequestSpec};
use crate::session::DynSessionManager;

use super::to_json;

pub struct AuthHttpClientService {
    api: DynApiClient,
    session: DynSessionManager,
}

impl AuthHttpClientService {
    pub fn new(api: DynApiClient, session: DynSessionManager) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthHttpClientService {
    async fn login(&self, input: &LoginRequest) -> Result<UserProfile, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!("Logging in user: {}", input.username);

        let spec = RequestSpec::post("/auth/login/").json(to_json(input)?);
        let response: LoginResponse = self.api.execute(spec).await.map_err(|e| {
            error!("Login failed for {}: {e}", input.username);
            ServiceError::from(e)
        })?;

        let user = response.user.clone();
        self.session
            .save(Session::authenticated(response.user, response.tokens))
            .await?;

        info!("User {} logged in successfully", user.username);
        Ok(user)
    }

    async fn logout(&self) -> Result<(), ServiceError> {
        info!("Logging out");
        self.session.clear().await?;
        Ok(())
    }

    async fn me(&self) -> Result<UserProfile, ServiceError> {
        if self.session.access_token().await.is_none() {
            return Err(ServiceError::NotLoggedIn);
        }

        let user: UserProfile = self.api.execute(RequestSpec::get("/auth/me/")).await?;
        self.session.update_user(user.clone()).await?;
        Ok(user)
    }

    async fn update_profile(
        &self,
        input: &UpdateProfileRequest,
    ) -> Result<UserProfile, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        if self.session.access_token().await.is_none() {
            return Err(ServiceError::NotLoggedIn);
        }

        info!("Updating profile");

        let spec = RequestSpec::patch("/auth/profile/").json(to_json(input)?);
        let user: UserProfile = self.api.execute(spec).await.map_err(|e| {
            error!("Profile update failed: {e}");
            ServiceError::from(e)
        })?;

        self.session.update_user(user.clone()).await?;

        info!("Profile updated for {}", user.username);
        Ok(user)
    }
}
