#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod console;
pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod user_config;

// Re-export commonly used types
pub use app::{build_store, report_server_error, serve, Args, DEFAULT_ADDR};
pub use console::{ConsoleState, ItemsApi, ItemsClient};
pub use item::{IdPolicy, Item, ItemError, ItemStore};
pub use server::{build_router, build_router_with_cors, AppState, ShutdownSignal};
pub use user_config::{load_user_config, UserConfig};
