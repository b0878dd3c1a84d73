use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

use crate::domain::{
    requests::{CreateUserRequest, FindAllUsers, UpdateUserRequest},
    response::{ListResponse, UserProfile},
};

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(
        &self,
        filters: &FindAllUsers,
    ) -> Result<ListResponse<UserProfile>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<UserProfile, ServiceError>;
    async fn create(&self, input: &CreateUserRequest) -> Result<UserProfile, ServiceError>;
    async fn update(&self, id: i32, input: &UpdateUserRequest)
    -> Result<UserProfile, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
