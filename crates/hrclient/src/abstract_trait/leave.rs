use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

use crate::domain::{
    requests::{ApplyLeaveRequest, FindAllLeaves, UpdateLeaveRequest},
    response::{LeaveResponse, ListResponse},
};

pub type DynLeaveService = Arc<dyn LeaveServiceTrait + Send + Sync>;

#[async_trait]
pub trait LeaveServiceTrait {
    async fn find_all(
        &self,
        filters: &FindAllLeaves,
    ) -> Result<ListResponse<LeaveResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<LeaveResponse, ServiceError>;
    async fn apply(&self, input: &ApplyLeaveRequest) -> Result<LeaveResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdateLeaveRequest,
    ) -> Result<LeaveResponse, ServiceError>;
    async fn approve(&self, id: i32, comment: Option<&str>)
    -> Result<LeaveResponse, ServiceError>;
    async fn reject(&self, id: i32, comment: Option<&str>) -> Result<LeaveResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
