use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::response::AttendanceStatus;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateAttendanceRequest {
    pub employee: i32,
    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,

    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct UpdateAttendanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hours: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct FindAllAttendance {
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub employee: Option<i32>,
    pub ordering: Option<String>,
}

impl FindAllAttendance {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.date {
            pairs.push(("date".to_string(), date.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(employee) = self.employee {
            pairs.push(("employee".to_string(), employee.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        pairs
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct MonthlySummaryQuery {
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: Option<u32>,

    pub year: Option<i32>,
    pub employee_id: Option<i32>,
}

impl MonthlySummaryQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(month) = self.month {
            pairs.push(("month".to_string(), month.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year".to_string(), year.to_string()));
        }
        if let Some(employee_id) = self.employee_id {
            pairs.push(("employee_id".to_string(), employee_id.to_string()));
        }
        pairs
    }
}
