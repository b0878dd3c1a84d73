mod attendance;
mod auth;
mod leave;
mod payroll;
mod user;

pub use self::attendance::AttendanceHttpClientService;
pub use self::auth::AuthHttpClientService;
pub use self::leave::LeaveHttpClientService;
pub use self::payroll::PayrollHttpClientService;
pub use self::user::UserHttpClientService;

use serde::Serialize;
use serde_json::Value;
use shared::errors::ServiceError;

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(value).map_err(|e| ServiceError::Internal(e.to_string()))
}
