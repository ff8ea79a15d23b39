use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use crate::item::{IdPolicy, ItemStore};
use crate::server::{wait_for_shutdown, ShutdownSignal};
use crate::user_config::UserConfig;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Items Daemon - in-memory item collection served over a REST API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "ITEMS_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=http://localhost:5173,https://items.example.com
    #[arg(
        long,
        env = "ITEMS_CORS_ORIGINS",
        default_value = crate::cors::DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEMS_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEMS_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.items-daemon/logs)
    #[arg(long, env = "ITEMS_LOG_DIR")]
    pub log_dir: Option<String>,
    /// Id policy for new items: counter or length (overrides the user config)
    #[arg(long, env = "ITEMS_ID_POLICY")]
    pub id_policy: Option<IdPolicy>,
    /// Start with an empty collection instead of the seed records
    #[arg(long, env = "ITEMS_NO_SEED", default_value = "false")]
    pub no_seed: bool,
}

/// Build the initial store from CLI arguments layered over the user config.
#[must_use]
pub fn build_store(args: &Args, user_cfg: &UserConfig) -> ItemStore {
    let policy = args.id_policy.unwrap_or(user_cfg.store.id_policy);
    if args.no_seed || !user_cfg.store.seed {
        ItemStore::empty(policy)
    } else {
        ItemStore::seeded(policy)
    }
}

/// Serve `router` on `listener` until a shutdown signal arrives.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown_rx: watch::Receiver<ShutdownSignal>,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Serving items API on http://{addr}");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await
}

pub fn report_server_error(addr: &str, log_file: &std::path::Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of items-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill items-daemon");
        eprintln!("  2. Use a different port:        items-daemon --addr 127.0.0.1:3001");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
