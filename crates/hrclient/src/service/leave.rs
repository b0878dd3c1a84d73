use async_trait::async_trait;
use shared::errors::ServiceError;
use shared::utils::format_validation_errors;
use tracing::{error, info};
use validator::Validate;

use crate::abstract_trait::LeaveServiceTrait;
use crate::domain::requests::{ApplyLeaveRequest, FindAllLeaves, UpdateLeaveRequest};
use crate::domain::response::{LeaveResponse, ListResponse};
use crate::pipeline::{DynApiClient, FormPart, RequestSpec};

pub struct LeaveHttpClientService {
    api: DynApiClient,
}

impl LeaveHttpClientService {
    pub fn new(api: DynApiClient) -> Self {
        Self { api }
    }

    fn apply_form(input: &ApplyLeaveRequest) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::Text {
                name: "leave_type".to_string(),
                value: input.leave_type.as_str().to_string(),
            },
            FormPart::Text {
                name: "start_date".to_string(),
                value: input.start_date.to_string(),
            },
            FormPart::Text {
                name: "end_date".to_string(),
                value: input.end_date.to_string(),
            },
            FormPart::Text {
                name: "reason".to_string(),
                value: input.reason.clone(),
            },
        ];

        if let Some(attachment) = &input.attachment {
            parts.push(FormPart::File {
                name: "attachment".to_string(),
                upload: attachment.clone(),
            });
        }

        parts
    }

    fn update_form(input: &UpdateLeaveRequest) -> Vec<FormPart> {
        let mut parts = Vec::new();

        if let Some(leave_type) = input.leave_type {
            parts.push(FormPart::Text {
                name: "leave_type".to_string(),
                value: leave_type.as_str().to_string(),
            });
        }
        if let Some(start_date) = input.start_date {
            parts.push(FormPart::Text {
                name: "start_date".to_string(),
                value: start_date.to_string(),
            });
        }
        if let Some(end_date) = input.end_date {
            parts.push(FormPart::Text {
                name: "end_date".to_string(),
                value: end_date.to_string(),
            });
        }
        if let Some(reason) = &input.reason {
            parts.push(FormPart::Text {
                name: "reason".to_string(),
                value: reason.clone(),
            });
        }
        if let Some(attachment) = &input.attachment {
            parts.push(FormPart::File {
                name: "attachment".to_string(),
                upload: attachment.clone(),
            });
        }

        parts
    }
}

#[async_trait]
impl LeaveServiceTrait for LeaveHttpClientService {
    async fn find_all(
        &self,
        filters: &FindAllLeaves,
    ) -> Result<ListResponse<LeaveResponse>, ServiceError> {
        info!("Fetching leave requests");

        let spec = RequestSpec::get("/leaves/").query(filters.query_pairs());
        let leaves = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch leave requests: {e}");
            ServiceError::from(e)
        })?;

        Ok(leaves)
    }

    async fn find_by_id(&self, id: i32) -> Result<LeaveResponse, ServiceError> {
        info!("Fetching leave request {id}");

        let spec = RequestSpec::get(format!("/leaves/{id}/"));
        let leave = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to fetch leave request {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(leave)
    }

    async fn apply(&self, input: &ApplyLeaveRequest) -> Result<LeaveResponse, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!(
            "Applying for {} leave from {} to {}",
            input.leave_type.as_str(),
            input.start_date,
            input.end_date
        );

        let spec = RequestSpec::post("/leaves/").form(Self::apply_form(input));
        let leave: LeaveResponse = self.api.execute(spec).await.map_err(|e| {
            error!("Leave application failed: {e}");
            ServiceError::from(e)
        })?;

        info!("Leave request {} submitted", leave.id);
        Ok(leave)
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateLeaveRequest,
    ) -> Result<LeaveResponse, ServiceError> {
        info!("Updating leave request {id}");

        let spec = RequestSpec::patch(format!("/leaves/{id}/")).form(Self::update_form(input));
        let leave = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to update leave request {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(leave)
    }

    async fn approve(
        &self,
        id: i32,
        comment: Option<&str>,
    ) -> Result<LeaveResponse, ServiceError> {
        info!("Approving leave request {id}");

        let spec = RequestSpec::post(format!("/leaves/{id}/approve/"))
            .json(serde_json::json!({ "comment": comment.unwrap_or("") }));
        let leave = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to approve leave request {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(leave)
    }

    async fn reject(&self, id: i32, comment: Option<&str>) -> Result<LeaveResponse, ServiceError> {
        info!("Rejecting leave request {id}");

        let spec = RequestSpec::post(format!("/leaves/{id}/reject/"))
            .json(serde_json::json!({ "comment": comment.unwrap_or("") }));
        let leave = self.api.execute(spec).await.map_err(|e| {
            error!("Failed to reject leave request {id}: {e}");
            ServiceError::from(e)
        })?;

        Ok(leave)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting leave request {id}");

        self.api
            .execute_empty(RequestSpec::delete(format!("/leaves/{id}/")))
            .await
            .map_err(|e| {
                error!("Failed to delete leave request {id}: {e}");
                ServiceError::from(e)
            })?;

        Ok(())
    }
}
