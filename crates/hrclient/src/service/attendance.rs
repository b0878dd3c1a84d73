use async_trait::async_trait;
use shared::errors::ServiceError;
use shared::utils::format_validation_errors;
use tracing::{error, info};
use validator::Validate;

use crate::abstract_trait::AttendanceServiceTrait;
use crate::domain::requests::{
    CreateAttendanceRequest, FindAllAttendance, MonthlySummaryQuery, UpdateAttendanceRequest,
};
use crate::domain::response::{
    AttendanceResponse, AttendanceSummary, CheckInResponse, CheckOutResponse, ListResponse,
};
use crate::pipeline::{DynApiClient, RequestSpec};

use super::to_json;

pub struct AttendanceHttpClientService {
    api: DynApiClient,
}

impl AttendanceHttpClientService {
    pub fn new(api: DynApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AttendanceServiceTrait for AttendanceHttpClientService {
    async fn check_in(&self) -> Result<CheckInResponse, ServiceError> {
        info!("Checking in");

        let record: CheckInResponse = self
            .api
            .execute(RequestSpec::post("/attendance/check_in/"))
            .await
            .map_err(|e| {
                error!("Check-in failed: {e}");
                ServiceError::from(e)
            })?;

        info!("Checked in at {}", record.time);
        Ok(record)
    }

    async fn check_out(&self) -> Result<CheckOutResponse, ServiceError> {
        info!("Checking out");

        let record: CheckOutResponse = self
            .api
            .execute(RequestSpec::post("/attendance/check_out/"))
            .await
            .map_err(|e| {
                error!("Check-out failed: {e}");
                ServiceError::from(e)
            })?;

        info!("Checked out, worked {} hours", record.work_hours);
        Ok(record)
    }

    async fn find_all(
        &self,
        filters: &FindAllAttendance,
    ) -> Result<ListResponse<AttendanceResponse>, ServiceError> {
        info!("Fetching attendance records");

        let spec = RequestSpec::get("/attendance/").query(filters.query_pairs());
        let records = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch attendance records: {e}");
            ServiceError::from(e)
        })?;

        Ok(records)
    }

    async fn monthly_summary(
        &self,
        query: &MonthlySummaryQuery,
    ) -> Result<AttendanceSummary, ServiceError> {
        query
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!("Fetching monthly attendance summary");

        let spec = RequestSpec::get("/attendance/monthly_summary/").query(query.query_pairs());
        let summary = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch attendance summary: {e}");
            ServiceError::from(e)
        })?;

        Ok(summary)
    }

    async fn create(
        &self,
        input: &CreateAttendanceRequest,
    ) -> Result<AttendanceResponse, ServiceError> {
        info!(
            "Creating attendance record for employee {} on {}",
            input.employee, input.date
        );

        let spec = RequestSpec::post("/attendance/").json(to_json(input)?);
        let record = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to create attendance record: {e}");
            ServiceError::from(e)
        })?;

        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateAttendanceRequest,
    ) -> Result<AttendanceResponse, ServiceError> {
        info!("Updating attendance record {id}");

        let spec = RequestSpec::patch(format!("/attendance/{id}/")).json(to_json(input)?);
        let record = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to update attendance record {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(record)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting attendance record {id}");

        self.api
            .execute_empty(RequestSpec::delete(format!("/attendance/{id}/")))
            .await
            .map_err(|e| {
                error!("Failed to delete attendance record {id}: {e}");
                ServiceError::from(e)
            })?;

        Ok(())
    }
}
