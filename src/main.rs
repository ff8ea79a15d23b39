use clap::Parser;
use color_eyre::eyre::Result;
use items_daemon::cors::{build_cors_layer, normalize_origins};
use items_daemon::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use items_daemon::server::{build_router_with_cors, AppState, ShutdownSignal};
use items_daemon::{build_store, report_server_error, serve, user_config, Args};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .clone()
        .map_or_else(logging::default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config; the file is optional.
    let user_cfg = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        user_config::UserConfig::default()
    });

    let store = build_store(&args, &user_cfg);
    info!(
        items = store.len(),
        id_policy = %store.id_policy(),
        "Item store initialized"
    );

    let cors_origins = normalize_origins(&args.cors_origins);
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");
    info!(
        "CORS origins: {}",
        if allow_all_origins {
            "*".to_string()
        } else {
            cors_origins.join(", ")
        }
    );
    let router = build_router_with_cors(AppState::new(store), build_cors_layer(cors_origins));

    let (_shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);

    info!("Starting items daemon on {}", args.addr);
    let listener = match TcpListener::bind(&args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(&args.addr, &log_file, &e);
            return Err(e.into());
        }
    };

    if let Err(e) = serve(listener, router, shutdown_rx).await {
        report_server_error(&args.addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Items daemon stopped");
    Ok(())
}
