use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};
use shared::utils::parse_date;

use crate::domain::requests::{FindAllAttendance, MonthlySummaryQuery};
use crate::domain::response::Role;
use crate::state::AppState;

use super::{print_json, require, require_own_page};

pub fn attendance_command() -> Command {
    Command::new("attendance")
        .about("Attendance tracking")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("check-in").about("Check in for today"))
        .subcommand(Command::new("check-out").about("Check out for today"))
        .subcommand(
            Command::new("list")
                .about("List attendance records")
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("status").long("status").value_name("STATUS"))
                .arg(Arg::new("employee").long("employee").value_name("ID"))
                .arg(Arg::new("ordering").long("ordering").value_name("FIELD")),
        )
        .subcommand(
            Command::new("summary")
                .about("Monthly attendance summary")
                .arg(Arg::new("month").long("month").value_name("1-12"))
                .arg(Arg::new("year").long("year").value_name("YEAR"))
                .arg(Arg::new("employee").long("employee").value_name("ID")),
        )
}

pub async fn attendance(matches: &ArgMatches, state: &AppState) -> Result<()> {
    match matches.subcommand() {
        Some(("check-in", _)) => check_in(state).await,
        Some(("check-out", _)) => check_out(state).await,
        Some(("list", sub)) => list(sub, state).await,
        Some(("summary", sub)) => summary(sub, state).await,
        _ => bail!("Unrecognized attendance command"),
    }
}

async fn check_in(state: &AppState) -> Result<()> {
    require(state, Role::Employee).await?;

    let record = state.di_container.attendance_service.check_in().await?;
    print_json(&record)
}

async fn check_out(state: &AppState) -> Result<()> {
    require(state, Role::Employee).await?;

    let record = state.di_container.attendance_service.check_out().await?;
    print_json(&record)
}

async fn list(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require_own_page(state).await?;

    let date = match matches.get_one::<String>("date") {
        Some(raw) => Some(parse_date(raw).context("date must be formatted as YYYY-MM-DD")?),
        None => None,
    };
    let employee = match matches.get_one::<String>("employee") {
        Some(raw) => Some(raw.parse::<i32>().context("employee must be an integer")?),
        None => None,
    };

    let filters = FindAllAttendance {
        date,
        status: matches.get_one::<String>("status").cloned(),
        employee,
        ordering: matches.get_one::<String>("ordering").cloned(),
    };

    let records = state
        .di_container
        .attendance_service
        .find_all(&filters)
        .await?;
    print_json(&records.into_results())
}

async fn summary(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require_own_page(state).await?;

    let month = match matches.get_one::<String>("month") {
        Some(raw) => Some(raw.parse::<u32>().context("month must be an integer")?),
        None => None,
    };
    let year = match matches.get_one::<String>("year") {
        Some(raw) => Some(raw.parse::<i32>().context("year must be an integer")?),
        None => None,
    };
    let employee_id = match matches.get_one::<String>("employee") {
        Some(raw) => Some(raw.parse::<i32>().context("employee must be an integer")?),
        None => None,
    };

    let query = MonthlySummaryQuery {
        month,
        year,
        employee_id,
    };

    let summary = state
        .di_container
        .attendance_service
        .monthly_summary(&query)
        .await?;
    print_json(&summary)
}
