mod cleanup_task;
mod server_config;
mod session_manager;
mod web_server;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::{log, logger};

use cleanup_task::spawn_cleanup_task;
use server_config::ServerConfig;
use session_manager::SessionManager;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tic_tac_toe_server")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = ServerConfig::load(args.config.as_deref())?;
    let session_manager = SessionManager::new();

    spawn_cleanup_task(
        session_manager.clone(),
        Duration::from_secs(config.session_cleanup_interval_secs),
        Duration::from_secs(config.session_inactivity_timeout_secs),
    );

    log!("Tic-tac-toe server starting on port {}", config.port);

    run_web_server(
        session_manager,
        PathBuf::from(&config.static_files_path),
        config.port,
    )
    .await;

    Ok(())
}
