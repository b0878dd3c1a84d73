mod attendance;
mod auth;
mod leave;
mod payroll;
mod user;

pub use self::attendance::{
    CreateAttendanceRequest, FindAllAttendance, MonthlySummaryQuery, UpdateAttendanceRequest,
};
pub use self::auth::{LoginRequest, UpdateProfileRequest};
pub use self::leave::{ApplyLeaveRequest, AttachmentUpload, FindAllLeaves, UpdateLeaveRequest};
pub use self::payroll::{CreatePayrollRequest, FindAllPayroll, UpdatePayrollRequest};
pub use self::user::{CreateUserRequest, FindAllUsers, UpdateUserRequest};
