use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};

use crate::domain::requests::FindAllPayroll;
use crate::state::AppState;

use super::{print_json, require_own_page};

pub fn payroll_command() -> Command {
    Command::new("payroll")
        .about("Payroll records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List payroll records")
                .arg(Arg::new("employee").long("employee").value_name("ID"))
                .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                .arg(Arg::new("ordering").long("ordering").value_name("FIELD")),
        )
        .subcommand(
            Command::new("get")
                .about("Show one payroll record")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
        .subcommand(
            Command::new("for-month")
                .about("Show the payslip published for a month")
                .arg(
                    Arg::new("employee")
                        .long("employee")
                        .value_name("ID")
                        .required(true),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("YYYY-MM")
                        .required(true),
                ),
        )
}

pub async fn payroll(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require_own_page(state).await?;

    match matches.subcommand() {
        Some(("list", sub)) => list(sub, state).await,
        Some(("get", sub)) => get(sub, state).await,
        Some(("for-month", sub)) => for_month(sub, state).await,
        _ => bail!("Unrecognized payroll command"),
    }
}

async fn list(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let employee = match matches.get_one::<String>("employee") {
        Some(raw) => Some(raw.parse::<i32>().context("employee must be an integer")?),
        None => None,
    };

    let filters = FindAllPayroll {
        employee,
        month: matches.get_one::<String>("month").cloned(),
        ordering: matches.get_one::<String>("ordering").cloned(),
    };

    let records = state
        .di_container
        .payroll_service
        .find_all(&filters)
        .await?;
    print_json(&records.into_results())
}

async fn get(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let id = matches
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_default()
        .parse::<i32>()
        .context("id must be an integer")?;

    let record = state.di_container.payroll_service.find_by_id(id).await?;
    print_json(&record)
}

async fn for_month(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let employee = matches
        .get_one::<String>("employee")
        .cloned()
        .unwrap_or_default()
        .parse::<i32>()
        .context("employee must be an integer")?;
    let month = matches
        .get_one::<String>("month")
        .cloned()
        .unwrap_or_default();

    match state
        .di_container
        .payroll_service
        .for_month(employee, &month)
        .await?
    {
        Some(record) => print_json(&record),
        None => {
            println!("No payroll published for {month}");
            Ok(())
        }
    }
}
