use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePayrollRequest {
    pub employee: i32,

    #[validate(length(min = 1, message = "Month is required"))]
    pub month: String,

    pub basic_salary: f64,
    pub hra: f64,
    pub standard_allowance: f64,
    pub other_allowances: f64,
    pub pf: f64,
    pub professional_tax: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct UpdatePayrollRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_salary: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hra: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_allowance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_allowances: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pf: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_tax: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct FindAllPayroll {
    pub employee: Option<i32>,
    pub month: Option<String>,
    pub ordering: Option<String>,
}

impl FindAllPayroll {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(employee) = self.employee {
            pairs.push(("employee".to_string(), employee.to_string()));
        }
        if let Some(month) = &self.month {
            pairs.push(("month".to_string(), month.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        pairs
    }
}
