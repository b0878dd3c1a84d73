mod attendance;
mod auth;
mod leave;
mod list;
mod payroll;
mod session;
mod user;

pub use self::attendance::{
    AttendanceResponse, AttendanceStatus, AttendanceSummary, CheckInResponse, CheckOutResponse,
};
pub use self::auth::{LoginResponse, RefreshResponse, TokenPair};
pub use self::leave::{LeaveResponse, LeaveStatus, LeaveType};
pub use self::list::{ListResponse, PageEnvelope};
pub use self::payroll::PayrollResponse;
pub use self::session::Session;
pub use self::user::{Role, UserProfile};
