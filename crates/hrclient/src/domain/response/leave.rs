use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LeaveType {
    #[serde(rename = "PAID")]
    Paid,
    #[serde(rename = "SICK")]
    Sick,
    #[serde(rename = "UNPAID")]
    Unpaid,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Paid => "PAID",
            LeaveType::Sick => "SICK",
            LeaveType::Unpaid => "UNPAID",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeaveResponse {
    pub id: i32,
    pub employee: i32,
    pub employee_name: String,
    pub employee_username: Option<String>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_count: Option<i32>,
    pub reason: Option<String>,
    pub attachment: Option<String>,
    pub status: LeaveStatus,
    pub admin_comment: Option<String>,
}
