use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    #[serde(rename = "PRESENT")]
    Present,
    #[serde(rename = "ABSENT")]
    Absent,
    #[serde(rename = "HALF_DAY")]
    HalfDay,
    #[serde(rename = "ON_LEAVE")]
    OnLeave,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendanceResponse {
    pub id: i32,
    pub employee: i32,
    pub employee_name: String,
    pub employee_username: Option<String>,
    pub date: NaiveDate,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub work_hours: Option<String>,
    pub extra_hours: Option<String>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttendanceSummary {
    pub month: u32,
    pub year: i32,
    pub total_days: u32,
    pub present: u32,
    pub absent: u32,
    pub half_day: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckInResponse {
    pub status: String,
    pub time: String,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckOutResponse {
    pub status: String,
    pub check_in: String,
    pub check_out: String,
    pub work_hours: String,
    pub extra_hours: String,
}
