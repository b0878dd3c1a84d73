use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

use crate::domain::requests::{LoginRequest, UpdateProfileRequest};
use crate::domain::response::Role;
use crate::guard::LOGIN_PAGE;
use crate::state::AppState;

use super::{print_json, require};

pub fn login_command() -> Command {
    Command::new("login")
        .about("Sign in and persist the session")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .value_name("USERNAME")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASSWORD")
                .required(true),
        )
}

pub async fn login(matches: &ArgMatches, state: &AppState) -> Result<()> {
    let input = LoginRequest {
        username: matches
            .get_one::<String>("username")
            .cloned()
            .unwrap_or_default(),
        password: matches
            .get_one::<String>("password")
            .cloned()
            .unwrap_or_default(),
    };

    let user = state.di_container.auth_service.login(&input).await?;
    println!(
        "Signed in as {} ({}), continue at {}",
        user.username,
        user.role,
        user.role.home_page()
    );
    Ok(())
}

pub fn logout_command() -> Command {
    Command::new("logout").about("Clear the stored session")
}

pub async fn logout(state: &AppState) -> Result<()> {
    state.di_container.auth_service.logout().await?;
    println!("Signed out, continue at {LOGIN_PAGE}");
    Ok(())
}

pub fn whoami_command() -> Command {
    Command::new("whoami").about("Show the signed-in profile")
}

pub async fn whoami(state: &AppState) -> Result<()> {
    let user = state.di_container.auth_service.me().await?;
    print_json(&user)
}

pub fn profile_command() -> Command {
    Command::new("profile")
        .about("Update the signed-in profile")
        .arg(Arg::new("email").long("email").value_name("EMAIL"))
        .arg(Arg::new("first-name").long("first-name").value_name("NAME"))
        .arg(Arg::new("last-name").long("last-name").value_name("NAME"))
        .arg(Arg::new("phone").long("phone").value_name("PHONE"))
        .arg(Arg::new("address").long("address").value_name("ADDRESS"))
        .arg(Arg::new("location").long("location").value_name("LOCATION"))
}

pub async fn profile(matches: &ArgMatches, state: &AppState) -> Result<()> {
    require(state, Role::Employee).await?;

    let input = UpdateProfileRequest {
        email: matches.get_one::<String>("email").cloned(),
        first_name: matches.get_one::<String>("first-name").cloned(),
        last_name: matches.get_one::<String>("last-name").cloned(),
        phone: matches.get_one::<String>("phone").cloned(),
        address: matches.get_one::<String>("address").cloned(),
        location: matches.get_one::<String>("location").cloned(),
    };

    let user = state
        .di_container
        .auth_service
        .update_profile(&input)
        .await?;
    print_json(&user)
}
