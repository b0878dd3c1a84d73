use async_trait::async_trait;
use shared::errors::ServiceError;
use shared::utils::{format_validation_errors, parse_date, parse_month};
use tracing::{error, info};
use validator::Validate;

use crate::abstract_trait::PayrollServiceTrait;
use crate::domain::requests::{CreatePayrollRequest, FindAllPayroll, UpdatePayrollRequest};
use crate::domain::response::{ListResponse, PayrollResponse};
use crate::pipeline::{DynApiClient, RequestSpec};

use super::to_json;

pub struct PayrollHttpClientService {
    api: DynApiClient,
}

impl PayrollHttpClientService {
    pub fn new(api: DynApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PayrollServiceTrait for PayrollHttpClientService {
    async fn find_all(
        &self,
        filters: &FindAllPayroll,
    ) -> Result<ListResponse<PayrollResponse>, ServiceError> {
        info!("Fetching payroll records");

        let spec = RequestSpec::get("/payroll/").query(filters.query_pairs());
        let records = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch payroll records: {e}");
            ServiceError::from(e)
        })?;

        Ok(records)
    }

    async fn find_by_id(&self, id: i32) -> Result<PayrollResponse, ServiceError> {
        info!("Fetching payroll record {id}");

        let spec = RequestSpec::get(format!("/payroll/{id}/"));
        let record = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch payroll record {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(record)
    }

    async fn create(&self, input: &CreatePayrollRequest) -> Result<PayrollResponse, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!(
            "Creating payroll record for employee {} for {}",
            input.employee, input.month
        );

        let spec = RequestSpec::post("/payroll/").json(to_json(input)?);
        let record: PayrollResponse = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to create payroll record: {e}");
            ServiceError::from(e)
        })?;

        info!("Payroll record {} created", record.id);
        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdatePayrollRequest,
    ) -> Result<PayrollResponse, ServiceError> {
        info!("Updating payroll record {id}");

        let spec = RequestSpec::patch(format!("/payroll/{id}/")).json(to_json(input)?);
        let record = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to update payroll record {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(record)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting payroll record {id}");

        self.api
            .execute_empty(RequestSpec::delete(format!("/payroll/{id}/")))
            .await
            .map_err(|e| {
                error!("Failed to delete payroll record {id}: {e}");
                ServiceError::from(e)
            })?;

        Ok(())
    }

    async fn for_month(
        &self,
        employee: i32,
        month: &str,
    ) -> Result<Option<PayrollResponse>, ServiceError> {
        if parse_month(month).is_err() && parse_date(month).is_none() {
            return Err(ServiceError::Validation(vec![
                "month: must be formatted as YYYY-MM or YYYY-MM-DD".to_string(),
            ]));
        }

        info!("Fetching payroll for employee {employee} for {month}");

        let filters = FindAllPayroll {
            employee: Some(employee),
            month: Some(month.to_string()),
            ordering: None,
        };
        let spec = RequestSpec::get("/payroll/").query(filters.query_pairs());
        let records: ListResponse<PayrollResponse> = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch payroll for employee {employee}: {e}");
            ServiceError::from(e)
        })?;

        Ok(records.into_results().into_iter().next())
    }
}
