mod attendance;
mod auth;
mod leave;
mod payroll;
mod session;
mod user;

pub use self::attendance::{AttendanceServiceTrait, DynAttendanceService};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::leave::{DynLeaveService, LeaveServiceTrait};
pub use self::payroll::{DynPayrollService, PayrollServiceTrait};
pub use self::session::{DynSessionStore, SessionStoreTrait};
pub use self::user::{DynUserService, UserServiceTrait};
