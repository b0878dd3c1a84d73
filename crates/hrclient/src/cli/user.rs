use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};
use shared::utils::parse_date;

use crate::domain::requests::{CreateUserRequest, FindAllUsers, UpdateUserRequest};
use crate::domain::response::Role;
use crate::state::AppState;

use super::{parse_role, print_json, require};

pub fn employees_command() -> Command {
    Command::new("employees")
        .about("Employee directory (admin area)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List employees")
                .arg(Arg::new("role").long("role").value_name("ROLE"))
                .arg(
                    Arg::new("department")
                        .long("department")
                        .value_name("DEPARTMENT"),
                )
                .arg(Arg::new("active").long("active").value_name("true|false"))
                .arg(Arg::new("search").long("search").value_name("TEXT"))
                .arg(Arg::new("page").long("page").value_name("PAGE")),
        )
        .subcommand(
            Command::new("get")
                .about("Show one employee")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
        .subcommand(
            Command::new("create")
                .about("Create an employee account")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .value_name("USERNAME")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .required(true),
                )
                .arg(Arg::new("role").long("role").value_name("ROLE"))
                .arg(Arg::new("first-name").long("first-name").value_name("NAME"))
                .arg(Arg::new("last-name").long("last-name").value_name("NAME"))
                .arg(
                    Arg::new("employee-id")
                        .long("employee-id")
                        .value_name("CODE"),
                )
                .arg(
                    Arg::new("department")
                        .long("department")
                        .value_name("DEPARTMENT"),
                )
                .arg(
                    Arg::new("designation")
                        .long("designation")
                        .value_name("TITLE"),
                )
                .arg(Arg::new("phone").long("phone").value_name("PHONE"))
                .arg(
                    Arg::new("joining-date")
                        .long("joining-date")
                        .value_name("YYYY-MM-DD"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update an employee")
                .arg(Arg::new("id").value_name("ID").required(true))
                .arg(Arg::new("email").long("email").value_name("EMAIL"))
                .arg(Arg::new("role").long("role").value_name("ROLE"))
                .arg(Arg::new("first-name").long("first-name").value_name("NAME"))
                .arg(Arg::new("last-name").long("last-name").value_name("NAME"))
                .arg(
                    Arg::new("department")
                        .long("department")
                        .value_name("DEPARTMENT"),
                )
                .arg(
                    Arg::new("designation")
                        .long("designation")
                        .value_name("TITLE"),
                )
                .arg(Arg::new("phone").long("phone").value_name("PHONE"))
                .arg(Arg::new("active").long("active").value_name("true|false")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an employee")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
}

pub async fn employees(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require(state, Role::Admin).await?;

    match matches.subcommand() {
        Some(("list", sub)) => list(sub, state).await,
        Some(("get", sub)) => get(sub, state).await,
        Some(("create", sub)) => create(sub, state).await,
        Some(("update", sub)) => update(sub, state).await,
        Some(("delete", sub)) => delete(sub, state).await,
        _ => bail!("Unrecognized employees command"),
    }
}

fn arg_i32(matches: &ArgMatches, name: &str) -> Result<i32> {
    matches
        .get_one::<String>(name)
        .cloned()
        .unwrap_or_default()
        .parse::<i32>()
        .with_context(|| format!("{name} must be an integer"))
}

async fn list(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let page = match matches.get_one::<String>("page") {
        Some(raw) => Some(raw.parse::<u32>().context("page must be an integer")?),
        None => None,
    };
    let is_active = match matches.get_one::<String>("active") {
        Some(raw) => Some(raw.parse::<bool>().context("active must be true or false")?),
        None => None,
    };

    let filters = FindAllUsers {
        role: matches.get_one::<String>("role").cloned(),
        department: matches.get_one::<String>("department").cloned(),
        is_active,
        search: matches.get_one::<String>("search").cloned(),
        page,
    };

    let users = state.di_container.user_service.find_all(&filters).await?;
    print_json(&users.into_results())
}

async fn get(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let id = arg_i32(matches, "id")?;
    let user = state.di_container.user_service.find_by_id(id).await?;
    print_json(&user)
}

async fn create(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let password = matches
        .get_one::<String>("password")
        .cloned()
        .unwrap_or_default();
    let role = match matches.get_one::<String>("role") {
        Some(raw) => Some(parse_role(raw)?),
        None => None,
    };
    let joining_date = match matches.get_one::<String>("joining-date") {
        Some(raw) => Some(parse_date(raw).context("joining-date must be formatted as YYYY-MM-DD")?),
        None => None,
    };

    let input = CreateUserRequest {
        username: matches
            .get_one::<String>("username")
            .cloned()
            .unwrap_or_default(),
        password_confirm: password.clone(),
        password,
        email: matches
            .get_one::<String>("email")
            .cloned()
            .unwrap_or_default(),
        first_name: matches.get_one::<String>("first-name").cloned(),
        last_name: matches.get_one::<String>("last-name").cloned(),
        employee_id: matches.get_one::<String>("employee-id").cloned(),
        department: matches.get_one::<String>("department").cloned(),
        designation: matches.get_one::<String>("designation").cloned(),
        phone: matches.get_one::<String>("phone").cloned(),
        address: None,
        location: None,
        role,
        joining_date,
    };

    let user = state.di_container.user_service.create(&input).await?;
    print_json(&user)
}

async fn update(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let id = arg_i32(matches, "id")?;
    let role = match matches.get_one::<String>("role") {
        Some(raw) => Some(parse_role(raw)?),
        None => None,
    };
    let is_active = match matches.get_one::<String>("active") {
        Some(raw) => Some(raw.parse::<bool>().context("active must be true or false")?),
        None => None,
    };

    let input = UpdateUserRequest {
        email: matches.get_one::<String>("email").cloned(),
        first_name: matches.get_one::<String>("first-name").cloned(),
        last_name: matches.get_one::<String>("last-name").cloned(),
        department: matches.get_one::<String>("department").cloned(),
        designation: matches.get_one::<String>("designation").cloned(),
        phone: matches.get_one::<String>("phone").cloned(),
        role,
        is_active,
        ..UpdateUserRequest::default()
    };

    let user = state.di_container.user_service.update(id, &input).await?;
    print_json(&user)
}

async fn delete(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let id = arg_i32(matches, "id")?;
    state.di_container.user_service.delete(id).await?;
    println!("Employee {id} deleted");
    Ok(())
}
