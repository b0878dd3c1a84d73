use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

impl Role {
    /// Landing page for this role after login.
    pub fn home_page(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Employee => "/employee/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Employee => write!(f, "EMPLOYEE"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub paid_leave_balance: Option<i32>,
    pub sick_leave_balance: Option<i32>,
    pub profile_picture: Option<String>,
    pub resume: Option<String>,
}
