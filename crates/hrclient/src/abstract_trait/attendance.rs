use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

use crate::domain::{
    requests::{
        CreateAttendanceRequest, FindAllAttendance, MonthlySummaryQuery, UpdateAttendanceRequest,
    },
    response::{
        AttendanceResponse, AttendanceSummary, CheckInResponse, CheckOutResponse, ListResponse,
    },
};

pub type DynAttendanceService = Arc<dyn AttendanceServiceTrait + Send + Sync>;

#[async_trait]
pub trait AttendanceServiceTrait {
    async fn check_in(&self) -> Result<CheckInResponse, ServiceError>;
    async fn check_out(&self) -> Result<CheckOutResponse, ServiceError>;
    async fn find_all(
        &self,
        filters: &FindAllAttendance,
    ) -> Result<ListResponse<AttendanceResponse>, ServiceError>;
    async fn monthly_summary(
        &self,
        query: &MonthlySummaryQuery,
    ) -> Result<AttendanceSummary, ServiceError>;
    async fn create(
        &self,
        input: &CreateAttendanceRequest,
    ) -> Result<AttendanceResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdateAttendanceRequest,
    ) -> Result<AttendanceResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
