use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

use crate::domain::{
    requests::{LoginRequest, UpdateProfileRequest},
    response::UserProfile,
};

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, input: &LoginRequest) -> Result<UserProfile, ServiceError>;
    async fn logout(&self) -> Result<(), ServiceError>;
    async fn me(&self) -> Result<UserProfile, ServiceError>;
    async fn update_profile(
        &self,
        input: &UpdateProfileRequest,
    ) -> Result<UserProfile, ServiceError>;
}
