use anyhow::{Context, Result};
use dotenv::dotenv;
use hrclient::{cli, state::AppState};
use shared::{config::Config, utils::init_logger};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("hrclient");

    let matches = cli::build().get_matches();

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config)
        .await
        .context("Failed to create the client state")?;

    cli::run(&matches, &state).await
}
