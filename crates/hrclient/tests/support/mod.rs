#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use hrclient::abstract_trait::DynSessionStore;
use hrclient::di::DependenciesInject;
use hrclient::domain::requests::LoginRequest;
use hrclient::domain::response::UserProfile;
use hrclient::guard::SessionGuard;
use hrclient::pipeline::{ApiClient, DynApiClient};
use hrclient::session::{DynSessionManager, MemorySessionStore, SessionManager};
use shared::config::ApiConfig;

pub const PASSWORD: &str = "pass1234";

type SharedState = Arc<Mutex<FixtureState>>;

/// In-memory stand-in for the HR backend, honoring its wire contract:
/// bearer-authenticated JSON endpoints under /core, SimpleJWT-style token
/// issue/refresh, and DRF list bodies in either bare or paginated shape.
pub struct FixtureState {
    pub users: Vec<Value>,
    pub leaves: Vec<Value>,
    pub attendance: Vec<Value>,
    pub payroll: Vec<Value>,
    pub next_id: i64,
    pub current_username: Option<String>,
    pub access_serial: u64,
    pub refresh_serial: u64,
    pub current_access: Option<String>,
    pub current_refresh: Option<String>,
    pub access_valid: bool,
    pub refresh_valid: bool,
    pub rotate_refresh: bool,
    pub envelope_lists: bool,
    pub invalidate_issued_access: bool,
    pub refresh_delay_ms: u64,
    pub login_calls: usize,
    pub refresh_calls: usize,
    pub me_calls: usize,
    pub last_authorization: Option<String>,
}

impl FixtureState {
    fn new() -> Self {
        Self {
            users: vec![
                json!({
                    "id": 1,
                    "username": "admin1",
                    "role": "ADMIN",
                    "email": "admin1@dayflow.test",
                    "first_name": "Asha",
                    "last_name": "Rao",
                    "department": "People Ops",
                    "designation": "HR Manager",
                }),
                json!({
                    "id": 2,
                    "username": "employee1",
                    "role": "EMPLOYEE",
                    "email": "employee1@dayflow.test",
                    "first_name": "Ravi",
                    "last_name": "Iyer",
                    "department": "Engineering",
                    "designation": "Developer",
                    "joining_date": "2023-04-10",
                    "paid_leave_balance": 12,
                    "sick_leave_balance": 6,
                }),
            ],
            leaves: vec![json!({
                "id": 300,
                "employee": 2,
                "employee_name": "Ravi Iyer",
                "employee_username": "employee1",
                "leave_type": "PAID",
                "start_date": "2025-09-01",
                "end_date": "2025-09-03",
                "days_count": 3,
                "reason": "Family function",
                "attachment": null,
                "status": "PENDING",
                "admin_comment": null,
            })],
            attendance: vec![json!({
                "id": 200,
                "employee": 2,
                "employee_name": "Ravi Iyer",
                "employee_username": "employee1",
                "date": "2025-08-01",
                "check_in": "09:00:00",
                "check_out": "17:30:00",
                "work_hours": "8.50",
                "extra_hours": "0.50",
                "status": "PRESENT",
            })],
            payroll: vec![
                json!({
                    "id": 100,
                    "employee": 2,
                    "employee_name": "Ravi Iyer",
                    "employee_username": "employee1",
                    "month": "2025-06",
                    "basic_salary": "50000.00",
                    "hra": "20000.00",
                    "standard_allowance": "4167.00",
                    "other_allowances": "5833.00",
                    "gross_salary": 80000.0,
                    "pf": "1800.00",
                    "professional_tax": "200.00",
                    "total_deductions": 2000.0,
                    "net_salary": "78000.00",
                }),
                json!({
                    "id": 101,
                    "employee": 2,
                    "employee_name": "Ravi Iyer",
                    "employee_username": "employee1",
                    "month": "2025-07",
                    "basic_salary": "50000.00",
                    "hra": "20000.00",
                    "standard_allowance": "4167.00",
                    "other_allowances": "5833.00",
                    "gross_salary": 80000.0,
                    "pf": "1800.00",
                    "professional_tax": "200.00",
                    "total_deductions": 2000.0,
                    "net_salary": "78000.00",
                }),
            ],
            next_id: 1000,
            current_username: None,
            access_serial: 0,
            refresh_serial: 0,
            current_access: None,
            current_refresh: None,
            access_valid: false,
            refresh_valid: false,
            rotate_refresh: false,
            envelope_lists: false,
            invalidate_issued_access: false,
            refresh_delay_ms: 50,
            login_calls: 0,
            refresh_calls: 0,
            me_calls: 0,
            last_authorization: None,
        }
    }

    fn current_user(&self) -> Value {
        self.users
            .iter()
            .find(|u| u["username"].as_str() == self.current_username.as_deref())
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn current_role(&self) -> String {
        self.current_user()["role"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    fn issue_access(&mut self) -> String {
        self.access_serial += 1;
        let access = format!("access-{}", self.access_serial);
        self.current_access = Some(access.clone());
        self.access_valid = !self.invalidate_issued_access;
        access
    }

    fn issue_refresh(&mut self) -> String {
        self.refresh_serial += 1;
        let refresh = format!("refresh-{}", self.refresh_serial);
        self.current_refresh = Some(refresh.clone());
        self.refresh_valid = true;
        refresh
    }

    fn shaped(&self, items: Vec<Value>) -> Value {
        if self.envelope_lists {
            json!({
                "count": items.len(),
                "next": null,
                "previous": null,
                "results": items,
            })
        } else {
            Value::Array(items)
        }
    }
}

fn authorized(state: &mut FixtureState, headers: &HeaderMap) -> bool {
    let raw = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    state.last_authorization = raw.clone();

    match (&raw, &state.current_access) {
        (Some(header), Some(access)) => {
            state.access_valid && header == &format!("Bearer {access}")
        }
        _ => false,
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Given token not valid for any token type"})),
    )
        .into_response()
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({"detail": "You do not have permission to perform this action."})),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Not found."})),
    )
        .into_response()
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(fields), Some(changes)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in changes {
            fields.insert(key.clone(), value.clone());
        }
    }
}

async fn login(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    s.login_calls += 1;

    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();
    let user = s
        .users
        .iter()
        .find(|u| u["username"].as_str() == Some(username.as_str()))
        .cloned();

    match user {
        Some(user) if password == PASSWORD => {
            let access = s.issue_access();
            let refresh = s.issue_refresh();
            s.current_username = Some(username);
            (
                StatusCode::OK,
                Json(json!({"user": user, "tokens": {"access": access, "refresh": refresh}})),
            )
                .into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response(),
    }
}

async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    s.me_calls += 1;
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(s.current_user())).into_response()
}

async fn refresh(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    // Widens the race window so overlapping 401s really do contend.
    let delay = { state.lock().unwrap().refresh_delay_ms };
    tokio::time::sleep(Duration::from_millis(delay)).await;

    let mut s = state.lock().unwrap();
    s.refresh_calls += 1;

    let supplied = body["refresh"].as_str().unwrap_or_default();
    if !s.refresh_valid || s.current_refresh.as_deref() != Some(supplied) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Token is invalid or expired"})),
        )
            .into_response();
    }

    let access = s.issue_access();
    let mut reply = json!({"access": access});
    if s.rotate_refresh {
        reply["refresh"] = json!(s.issue_refresh());
    }
    (StatusCode::OK, Json(reply)).into_response()
}

async fn update_profile(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    let username = s.current_username.clone();
    let Some(user) = s
        .users
        .iter_mut()
        .find(|u| u["username"].as_str() == username.as_deref())
    else {
        return not_found();
    };

    merge(user, &body);
    let updated = user.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn list_users(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let items: Vec<Value> = s
        .users
        .iter()
        .filter(|u| match params.get("role") {
            Some(role) => u["role"].as_str() == Some(role.as_str()),
            None => true,
        })
        .filter(|u| match params.get("department") {
            Some(department) => u["department"].as_str() == Some(department.as_str()),
            None => true,
        })
        .filter(|u| match params.get("search") {
            Some(search) => u["username"]
                .as_str()
                .unwrap_or_default()
                .contains(search.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    (StatusCode::OK, Json(s.shaped(items))).into_response()
}

async fn create_user(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let id = s.next_id;
    s.next_id += 1;
    let mut user = json!({
        "id": id,
        "username": body["username"],
        "role": if body["role"].is_null() { json!("EMPLOYEE") } else { body["role"].clone() },
        "email": body["email"],
    });
    for key in [
        "first_name",
        "last_name",
        "employee_id",
        "department",
        "designation",
        "phone",
        "address",
        "location",
        "joining_date",
    ] {
        if !body[key].is_null() {
            user[key] = body[key].clone();
        }
    }

    s.users.push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    match s.users.iter().find(|u| u["id"].as_i64() == Some(id)) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => not_found(),
    }
}

async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let Some(user) = s.users.iter_mut().find(|u| u["id"].as_i64() == Some(id)) else {
        return not_found();
    };
    merge(user, &body);
    let updated = user.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    s.users.retain(|u| u["id"].as_i64() != Some(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_leaves(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    let items: Vec<Value> = s
        .leaves
        .iter()
        .filter(|l| match params.get("status") {
            Some(status) => l["status"].as_str() == Some(status.as_str()),
            None => true,
        })
        .filter(|l| match params.get("leave_type") {
            Some(leave_type) => l["leave_type"].as_str() == Some(leave_type.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    (StatusCode::OK, Json(s.shaped(items))).into_response()
}

async fn create_leave(
    State(state): State<SharedState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    {
        let mut s = state.lock().unwrap();
        if !authorized(&mut s, &headers) {
            return unauthorized();
        }
    }

    let mut fields = serde_json::Map::new();
    let mut attachment: Option<(String, usize)> = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(|f| f.to_string()) {
            Some(file_name) => {
                let bytes = field.bytes().await.unwrap();
                attachment = Some((file_name, bytes.len()));
            }
            None => {
                fields.insert(name, Value::String(field.text().await.unwrap()));
            }
        }
    }

    let mut s = state.lock().unwrap();
    let id = s.next_id;
    s.next_id += 1;
    let user = s.current_user();
    let record = json!({
        "id": id,
        "employee": user["id"],
        "employee_name": user["username"],
        "employee_username": user["username"],
        "leave_type": fields.get("leave_type").cloned().unwrap_or(Value::Null),
        "start_date": fields.get("start_date").cloned().unwrap_or(Value::Null),
        "end_date": fields.get("end_date").cloned().unwrap_or(Value::Null),
        "days_count": null,
        "reason": fields.get("reason").cloned().unwrap_or(Value::Null),
        "attachment": attachment.as_ref().map(|(name, _)| format!("/media/leave_attachments/{name}")),
        "attachment_size": attachment.as_ref().map(|(_, size)| size),
        "status": "PENDING",
        "admin_comment": null,
    });

    s.leaves.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn get_leave(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    match s.leaves.iter().find(|l| l["id"].as_i64() == Some(id)) {
        Some(leave) => (StatusCode::OK, Json(leave.clone())).into_response(),
        None => not_found(),
    }
}

async fn update_leave(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    {
        let mut s = state.lock().unwrap();
        if !authorized(&mut s, &headers) {
            return unauthorized();
        }
    }

    let mut fields = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if field.file_name().is_none() {
            fields.insert(name, Value::String(field.text().await.unwrap()));
        }
    }

    let mut s = state.lock().unwrap();
    let Some(leave) = s.leaves.iter_mut().find(|l| l["id"].as_i64() == Some(id)) else {
        return not_found();
    };
    merge(leave, &Value::Object(fields));
    let updated = leave.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn delete_leave(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    s.leaves.retain(|l| l["id"].as_i64() != Some(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn moderate_leave(state: SharedState, id: i64, headers: HeaderMap, body: Value, status: &str) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let Some(leave) = s.leaves.iter_mut().find(|l| l["id"].as_i64() == Some(id)) else {
        return not_found();
    };
    leave["status"] = json!(status);
    leave["admin_comment"] = body["comment"].clone();
    let updated = leave.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn approve_leave(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    moderate_leave(state, id, headers, body, "APPROVED").await
}

async fn reject_leave(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    moderate_leave(state, id, headers, body, "REJECTED").await
}

async fn check_in(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    (
        StatusCode::OK,
        Json(json!({"status": "Checked in", "time": "09:02:11", "date": "2025-08-22"})),
    )
        .into_response()
}

async fn check_out(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "Checked out",
            "check_in": "09:02:11",
            "check_out": "17:32:40",
            "work_hours": "8.51",
            "extra_hours": "0.51",
        })),
    )
        .into_response()
}

async fn list_attendance(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    let items: Vec<Value> = s
        .attendance
        .iter()
        .filter(|a| match params.get("date") {
            Some(date) => a["date"].as_str() == Some(date.as_str()),
            None => true,
        })
        .filter(|a| match params.get("status") {
            Some(status) => a["status"].as_str() == Some(status.as_str()),
            None => true,
        })
        .filter(|a| match params.get("employee") {
            Some(employee) => a["employee"].as_i64().map(|e| e.to_string()).as_deref()
                == Some(employee.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    (StatusCode::OK, Json(s.shaped(items))).into_response()
}

async fn monthly_summary(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    let month: u32 = params
        .get("month")
        .and_then(|m| m.parse().ok())
        .unwrap_or(8);
    let year: i32 = params
        .get("year")
        .and_then(|y| y.parse().ok())
        .unwrap_or(2025);

    (
        StatusCode::OK,
        Json(json!({
            "month": month,
            "year": year,
            "total_days": 21,
            "present": 18,
            "absent": 2,
            "half_day": 1,
        })),
    )
        .into_response()
}

async fn create_attendance(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let id = s.next_id;
    s.next_id += 1;
    let employee = body["employee"].as_i64().unwrap_or_default();
    let employee_name = s
        .users
        .iter()
        .find(|u| u["id"].as_i64() == Some(employee))
        .map(|u| u["username"].clone())
        .unwrap_or(Value::Null);
    let mut record = json!({
        "id": id,
        "employee": employee,
        "employee_name": employee_name,
        "date": body["date"],
        "check_in": null,
        "check_out": null,
        "work_hours": null,
        "extra_hours": null,
        "status": body["status"],
    });
    merge(&mut record, &json!({"check_in": body["check_in"], "check_out": body["check_out"]}));

    s.attendance.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update_attendance(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let Some(record) = s
        .attendance
        .iter_mut()
        .find(|a| a["id"].as_i64() == Some(id))
    else {
        return not_found();
    };
    merge(record, &body);
    let updated = record.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn delete_attendance(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    s.attendance.retain(|a| a["id"].as_i64() != Some(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_payroll(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    let items: Vec<Value> = s
        .payroll
        .iter()
        .filter(|p| match params.get("employee") {
            Some(employee) => p["employee"].as_i64().map(|e| e.to_string()).as_deref()
                == Some(employee.as_str()),
            None => true,
        })
        .filter(|p| match params.get("month") {
            Some(month) => p["month"].as_str() == Some(month.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    (StatusCode::OK, Json(s.shaped(items))).into_response()
}

async fn get_payroll(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }

    match s.payroll.iter().find(|p| p["id"].as_i64() == Some(id)) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => not_found(),
    }
}

async fn create_payroll(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let id = s.next_id;
    s.next_id += 1;
    let employee = body["employee"].as_i64().unwrap_or_default();
    let employee_name = s
        .users
        .iter()
        .find(|u| u["id"].as_i64() == Some(employee))
        .map(|u| u["username"].clone())
        .unwrap_or(Value::Null);

    let money = |key: &str| format!("{:.2}", body[key].as_f64().unwrap_or_default());
    let basic = body["basic_salary"].as_f64().unwrap_or_default();
    let hra = body["hra"].as_f64().unwrap_or_default();
    let standard = body["standard_allowance"].as_f64().unwrap_or_default();
    let other = body["other_allowances"].as_f64().unwrap_or_default();
    let pf = body["pf"].as_f64().unwrap_or_default();
    let tax = body["professional_tax"].as_f64().unwrap_or_default();

    let record = json!({
        "id": id,
        "employee": employee,
        "employee_name": employee_name,
        "month": body["month"],
        "basic_salary": money("basic_salary"),
        "hra": money("hra"),
        "standard_allowance": money("standard_allowance"),
        "other_allowances": money("other_allowances"),
        "gross_salary": basic + hra + standard + other,
        "pf": money("pf"),
        "professional_tax": money("professional_tax"),
        "total_deductions": pf + tax,
        "net_salary": format!("{:.2}", basic + hra + standard + other - pf - tax),
    });

    s.payroll.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update_payroll(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    let Some(record) = s.payroll.iter_mut().find(|p| p["id"].as_i64() == Some(id)) else {
        return not_found();
    };
    merge(record, &body);
    let updated = record.clone();
    (StatusCode::OK, Json(updated)).into_response()
}

async fn delete_payroll(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&mut s, &headers) {
        return unauthorized();
    }
    if s.current_role() != "ADMIN" {
        return forbidden();
    }

    s.payroll.retain(|p| p["id"].as_i64() != Some(id));
    StatusCode::NO_CONTENT.into_response()
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/core/auth/login/", post(login))
        .route("/core/auth/me/", get(me))
        .route("/core/auth/token/refresh/", post(refresh))
        .route("/core/auth/profile/", patch(update_profile))
        .route("/core/users/", get(list_users).post(create_user))
        .route(
            "/core/users/{id}/",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/core/leaves/", get(list_leaves).post(create_leave))
        .route(
            "/core/leaves/{id}/",
            get(get_leave).patch(update_leave).delete(delete_leave),
        )
        .route("/core/leaves/{id}/approve/", post(approve_leave))
        .route("/core/leaves/{id}/reject/", post(reject_leave))
        .route(
            "/core/attendance/",
            get(list_attendance).post(create_attendance),
        )
        .route(
            "/core/attendance/{id}/",
            patch(update_attendance).delete(delete_attendance),
        )
        .route("/core/attendance/check_in/", post(check_in))
        .route("/core/attendance/check_out/", post(check_out))
        .route("/core/attendance/monthly_summary/", get(monthly_summary))
        .route("/core/payroll/", get(list_payroll).post(create_payroll))
        .route(
            "/core/payroll/{id}/",
            get(get_payroll).patch(update_payroll).delete(delete_payroll),
        )
        .with_state(state)
}

/// Handle to one spawned fixture backend.
pub struct FixtureBackend {
    pub addr: SocketAddr,
    pub state: SharedState,
}

impl FixtureBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(Mutex::new(FixtureState::new()));
        let app = router(state.clone());
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self { addr, state }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://{}/core", self.addr),
            timeout_secs: 5,
        }
    }

    /// Invalidates the current access token, as if it had expired.
    pub fn expire_access(&self) {
        self.state.lock().unwrap().access_valid = false;
    }

    pub fn revoke_refresh(&self) {
        self.state.lock().unwrap().refresh_valid = false;
    }

    pub fn set_rotate_refresh(&self, on: bool) {
        self.state.lock().unwrap().rotate_refresh = on;
    }

    pub fn set_envelope_lists(&self, on: bool) {
        self.state.lock().unwrap().envelope_lists = on;
    }

    /// Every token handed out from now on is already expired.
    pub fn set_invalidate_issued_access(&self, on: bool) {
        self.state.lock().unwrap().invalidate_issued_access = on;
    }

    pub fn set_refresh_delay_ms(&self, delay: u64) {
        self.state.lock().unwrap().refresh_delay_ms = delay;
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.lock().unwrap().refresh_calls
    }

    pub fn login_calls(&self) -> usize {
        self.state.lock().unwrap().login_calls
    }

    pub fn me_calls(&self) -> usize {
        self.state.lock().unwrap().me_calls
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.state.lock().unwrap().last_authorization.clone()
    }

    pub fn current_access(&self) -> Option<String> {
        self.state.lock().unwrap().current_access.clone()
    }

    pub fn current_refresh(&self) -> Option<String> {
        self.state.lock().unwrap().current_refresh.clone()
    }

    pub fn last_leave(&self) -> Value {
        self.state
            .lock()
            .unwrap()
            .leaves
            .last()
            .cloned()
            .unwrap_or(Value::Null)
    }
}

/// Fixture backend plus a fully wired client stack against it.
pub struct Harness {
    pub backend: FixtureBackend,
    pub session: DynSessionManager,
    pub api: DynApiClient,
    pub guard: SessionGuard,
    pub di: DependenciesInject,
}

pub async fn spawn_harness() -> Harness {
    spawn_harness_with_timeout(5).await
}

pub async fn spawn_harness_with_timeout(timeout_secs: u64) -> Harness {
    let backend = FixtureBackend::spawn().await;
    let config = ApiConfig {
        timeout_secs,
        ..backend.api_config()
    };
    let store: DynSessionStore = Arc::new(MemorySessionStore::default());
    let session: DynSessionManager = Arc::new(SessionManager::new(store));
    session.init().await;
    let api: DynApiClient = Arc::new(ApiClient::new(&config, session.clone()).unwrap());
    let guard = SessionGuard::new(session.clone(), api.clone());
    let di = DependenciesInject::new(api.clone(), session.clone());

    Harness {
        backend,
        session,
        api,
        guard,
        di,
    }
}

impl Harness {
    pub async fn login_admin(&self) -> UserProfile {
        self.di
            .auth_service
            .login(&LoginRequest {
                username: "admin1".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn login_employee(&self) -> UserProfile {
        self.di
            .auth_service
            .login(&LoginRequest {
                username: "employee1".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap()
    }
}
