use serde::{Deserialize, Serialize};

/// Salary components arrive exactly as the backend serializes them
/// (decimal fields as strings, computed totals as numbers); nothing is
/// recomputed on this side.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PayrollResponse {
    pub id: i32,
    pub employee: i32,
    pub employee_name: String,
    pub employee_username: Option<String>,
    pub month: String,
    pub basic_salary: String,
    pub hra: String,
    pub standard_allowance: String,
    pub other_allowances: String,
    pub gross_salary: f64,
    pub pf: String,
    pub professional_tax: String,
    pub total_deductions: f64,
    pub net_salary: String,
}
