use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::response::LeaveType;

/// Attachment bytes are carried opaquely and passed through as one
/// multipart part; nothing inspects the content.
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Validate, Clone)]
pub struct ApplyLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,

    pub attachment: Option<AttachmentUpload>,
}

#[derive(Debug, Validate, Clone, Default)]
pub struct UpdateLeaveRequest {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub attachment: Option<AttachmentUpload>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct FindAllLeaves {
    pub status: Option<String>,
    pub leave_type: Option<String>,
    pub ordering: Option<String>,
}

impl FindAllLeaves {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(leave_type) = &self.leave_type {
            pairs.push(("leave_type".to_string(), leave_type.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        pairs
    }
}
