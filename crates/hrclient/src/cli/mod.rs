mod attendance;
mod auth;
mod leave;
mod payroll;
mod user;

use anyhow::{Result, bail};
use clap::{ArgMatches, Command};
use serde::Serialize;

use crate::domain::response::{Role, UserProfile};
use crate::guard::{GuardOutcome, LOGIN_PAGE};
use crate::state::AppState;

pub fn build() -> Command {
    Command::new("hrclient")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for the Dayflow HR backend")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::login_command())
        .subcommand(auth::logout_command())
        .subcommand(auth::whoami_command())
        .subcommand(auth::profile_command())
        .subcommand(user::employees_command())
        .subcommand(leave::leaves_command())
        .subcommand(attendance::attendance_command())
        .subcommand(payroll::payroll_command())
}

pub async fn run(matches: &ArgMatches, state: &AppState) -> Result<()> {
    match matches.subcommand() {
        Some(("login", sub)) => auth::login(sub, state).await,
        Some(("logout", _)) => auth::logout(state).await,
        Some(("whoami", _)) => auth::whoami(state).await,
        Some(("profile", sub)) => auth::profile(sub, state).await,
        Some(("employees", sub)) => user::employees(sub, state).await,
        Some(("leaves", sub)) => leave::leaves(sub, state).await,
        Some(("attendance", sub)) => attendance::attendance(sub, state).await,
        Some(("payroll", sub)) => payroll::payroll(sub, state).await,
        _ => bail!("Unrecognized command"),
    }
}

/// Gates a command behind the role that owns the matching page. Anything
/// but `Authorized` aborts before a single protected request goes out.
pub(crate) async fn require(state: &AppState, role: Role) -> Result<UserProfile> {
    match state.guard.check(role).await {
        GuardOutcome::Authorized(profile) => Ok(profile),
        GuardOutcome::Redirect(to) if to == LOGIN_PAGE => {
            bail!("Not logged in. Please run 'login' first.")
        }
        GuardOutcome::Redirect(to) => bail!("Not available for your role, continue at {to}"),
    }
}

/// Pages that exist in both areas route by the signed-in role.
pub(crate) async fn require_own_page(state: &AppState) -> Result<UserProfile> {
    let role = match state.session.user().await {
        Some(user) => user.role,
        None => state.di_container.auth_service.me().await?.role,
    };
    require(state, role).await
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn parse_role(raw: &str) -> Result<Role> {
    match raw.to_uppercase().as_str() {
        "ADMIN" => Ok(Role::Admin),
        "EMPLOYEE" => Ok(Role::Employee),
        other => bail!("Unknown role '{other}', expected ADMIN or EMPLOYEE"),
    }
}
