use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

use crate::domain::{
    requests::{CreatePayrollRequest, FindAllPayroll, UpdatePayrollRequest},
    response::{ListResponse, PayrollResponse},
};

pub type DynPayrollService = Arc<dyn PayrollServiceTrait + Send + Sync>;

#[async_trait]
pub trait PayrollServiceTrait {
    async fn find_all(
        &self,
        filters: &FindAllPayroll,
    ) -> Result<ListResponse<PayrollResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<PayrollResponse, ServiceError>;
    async fn create(&self, input: &CreatePayrollRequest)
    -> Result<PayrollResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdatePayrollRequest,
    ) -> Result<PayrollResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn for_month(
        &self,
        employee: i32,
        month: &str,
    ) -> Result<Option<PayrollResponse>, ServiceError>;
}
