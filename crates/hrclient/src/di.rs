use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynAttendanceService, DynAuthService, DynLeaveService, DynPayrollService, DynUserService,
    },
    pipeline::DynApiClient,
    service::{
        AttendanceHttpClientService, AuthHttpClientService, LeaveHttpClientService,
        PayrollHttpClientService, UserHttpClientService,
    },
    session::DynSessionManager,
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub leave_service: DynLeaveService,
    pub attendance_service: DynAttendanceService,
    pub payroll_service: DynPayrollService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("leave_service", &"DynLeaveService")
            .field("attendance_service", &"DynAttendanceService")
            .field("payroll_service", &"DynPayrollService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(api: DynApiClient, session: DynSessionManager) -> Self {
        let auth_service: DynAuthService =
            Arc::new(AuthHttpClientService::new(api.clone(), session));

        let user_service: DynUserService = Arc::new(UserHttpClientService::new(api.clone()));

        let leave_service: DynLeaveService = Arc::new(LeaveHttpClientService::new(api.clone()));

        let attendance_service: DynAttendanceService =
            Arc::new(AttendanceHttpClientService::new(api.clone()));

        let payroll_service: DynPayrollService = Arc::new(PayrollHttpClientService::new(api));

        Self {
            auth_service,
            user_service,
            leave_service,
            attendance_service,
            payroll_service,
        }
    }
}
