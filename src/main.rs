//! Local auth portal - Entry Point
//!
//! Login and registration against a user list persisted on disk.

use log::info;
use tokio::io::BufReader;

use local_auth::config::AppConfig;
use local_auth::console::run_console;
use local_auth::error::PortalError;
use local_auth::utils::logging::setup_logging;
use local_auth::FilePortal;

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    let (startup, runtime) = AppConfig::load()?.split()?;

    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging(&startup.log_level);

    info!("Launching auth portal...");

    let mut portal = FilePortal::from_config(&startup, runtime)?;

    run_console(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &mut portal,
        startup.max_command_length,
    )
    .await?;

    info!("Auth portal stopped");
    Ok(())
}
