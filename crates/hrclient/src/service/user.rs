use async_trait::async_trait;
use shared::errors::ServiceError;
use shared::utils::format_validation_errors;
use tracing::{error, info};
use validator::Validate;

use crate::abstract_trait::UserServiceTrait;
use crate::domain::requests::{CreateUserRequest, FindAllUsers, UpdateUserRequest};
use crate::domain::response::{ListResponse, UserProfile};
use crate::pipeline::{DynApiClient, RequestSpec};

use super::to_json;

pub struct UserHttpClientService {
    api: DynApiClient,
}

impl UserHttpClientService {
    pub fn new(api: DynApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserServiceTrait for UserHttpClientService {
    async fn find_all(
        &self,
        filters: &FindAllUsers,
    ) -> Result<ListResponse<UserProfile>, ServiceError> {
        info!("Fetching employee directory");

        let spec = RequestSpec::get("/users/").query(filters.query_pairs());
        let users = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch employees: {e}");
            ServiceError::from(e)
        })?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<UserProfile, ServiceError> {
        info!("Fetching employee {id}");

        let spec = RequestSpec::get(format!("/users/{id}/"));
        let user = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch employee {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(user)
    }

    async fn create(&self, input: &CreateUserRequest) -> Result<UserProfile, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!("Creating employee: {}", input.username);

        let spec = RequestSpec::post("/users/").json(to_json(input)?);
        let user: UserProfile = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to create employee {}: {e}", input.username);
            ServiceError::from(e)
        })?;

        info!("Employee {} created with id {}", user.username, user.id);
        Ok(user)
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateUserRequest,
    ) -> Result<UserProfile, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!("Updating employee {id}");

        let spec = RequestSpec::patch(format!("/users/{id}/")).json(to_json(input)?);
        let user = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to update employee {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting employee {id}");

        self.api
            .execute_empty(RequestSpec::delete(format!("/users/{id}/")))
            .await
            .map_err(|e| {
                error!("Failed to delete employee {id}: {e}");
                ServiceError::from(e)
            })?;

        Ok(())
    }
}
