use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};
use shared::utils::parse_date;

use crate::domain::requests::{ApplyLeaveRequest, AttachmentUpload, FindAllLeaves};
use crate::domain::response::{LeaveType, Role};
use crate::state::AppState;

use super::{print_json, require, require_own_page};

pub fn leaves_command() -> Command {
    Command::new("leaves")
        .about("Leave requests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List leave requests")
                .arg(Arg::new("status").long("status").value_name("STATUS"))
                .arg(Arg::new("type").long("type").value_name("TYPE"))
                .arg(Arg::new("ordering").long("ordering").value_name("FIELD")),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply for leave")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("PAID|SICK|UNPAID")
                        .required(true),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(
                    Arg::new("reason")
                        .long("reason")
                        .value_name("TEXT")
                        .required(true),
                )
                .arg(Arg::new("attachment").long("attachment").value_name("PATH")),
        )
        .subcommand(
            Command::new("approve")
                .about("Approve a leave request (admin area)")
                .arg(Arg::new("id").value_name("ID").required(true))
                .arg(Arg::new("comment").long("comment").value_name("TEXT")),
        )
        .subcommand(
            Command::new("reject")
                .about("Reject a leave request (admin area)")
                .arg(Arg::new("id").value_name("ID").required(true))
                .arg(Arg::new("comment").long("comment").value_name("TEXT")),
        )
}

pub async fn leaves(matches: &ArgMatches, state: &AppState) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub)) => list(sub, state).await,
        Some(("apply", sub)) => apply(sub, state).await,
        Some(("approve", sub)) => moderate(sub, state, true).await,
        Some(("reject", sub)) => moderate(sub, state, false).await,
        _ => bail!("Unrecognized leaves command"),
    }
}

fn parse_leave_type(raw: &str) -> Result<LeaveType> {
    match raw.to_uppercase().as_str() {
        "PAID" => Ok(LeaveType::Paid),
        "SICK" => Ok(LeaveType::Sick),
        "UNPAID" => Ok(LeaveType::Unpaid),
        other => bail!("Unknown leave type '{other}', expected PAID, SICK or UNPAID"),
    }
}

async fn list(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require_own_page(state).await?;

    let filters = FindAllLeaves {
        status: matches.get_one::<String>("status").cloned(),
        leave_type: matches.get_one::<String>("type").cloned(),
        ordering: matches.get_one::<String>("ordering").cloned(),
    };

    let leaves = state.di_container.leave_service.find_all(&filters).await?;
    print_json(&leaves.into_results())
}

async fn apply(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require(state, Role::Employee).await?;

    let leave_type = parse_leave_type(
        matches
            .get_one::<String>("type")
            .map(String::as_str)
            .unwrap_or_default(),
    )?;
    let start_date = parse_date(
        matches
            .get_one::<String>("start")
            .map(String::as_str)
            .unwrap_or_default(),
    )
    .context("start must be formatted as YYYY-MM-DD")?;
    let end_date = parse_date(
        matches
            .get_one::<String>("end")
            .map(String::as_str)
            .unwrap_or_default(),
    )
    .context("end must be formatted as YYYY-MM-DD")?;

    let attachment = match matches.get_one::<String>("attachment") {
        Some(raw) => Some(read_attachment(raw).await?),
        None => None,
    };

    let input = ApplyLeaveRequest {
        leave_type,
        start_date,
        end_date,
        reason: matches
            .get_one::<String>("reason")
            .cloned()
            .unwrap_or_default(),
        attachment,
    };

    let leave = state.di_container.leave_service.apply(&input).await?;
    print_json(&leave)
}

async fn read_attachment(raw: &str) -> Result<AttachmentUpload> {
    let path = std::path::Path::new(raw);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| raw.to_string());
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read attachment {raw}"))?;

    Ok(AttachmentUpload { file_name, content })
}

async fn moderate(matches: &ArgMatches, state: &AppState, approve: bool) -> Result<()> {
    require(state, Role::Admin).await?;

    let id = matches
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_default()
        .parse::<i32>()
        .context("id must be an integer")?;
    let comment = matches.get_one::<String>("comment").map(String::as_str);

    let leave = if approve {
        state.di_container.leave_service.approve(id, comment).await?
    } else {
        state.di_container.leave_service.reject(id, comment).await?
    };

    print_json(&leave)
}
