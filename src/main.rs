mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod frontends;
mod inventory_actor;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, AppConfig, FrontEnd, InventorySystem};
use crate::frontends::{run_form, run_menu, Terminal};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(mode = ?config.mode, "Starting inventory tracker");

    let system = InventorySystem::new(config.channel_capacity());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    let session = match config.mode {
        FrontEnd::Menu => run_menu(&system.inventory_client, &mut terminal).await,
        FrontEnd::Form => run_form(&system.inventory_client, &mut terminal).await,
    };
    drop(terminal);

    if let Err(e) = &session {
        error!(error = %e, "Session ended with an error");
    }

    // The inventory lives only as long as the session
    system.shutdown().await?;

    info!("Inventory tracker exited");
    session.map_err(|e| e.to_string())
}
