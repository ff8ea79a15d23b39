//! HTTP surface of the daemon: router, shared state, and shutdown plumbing.

pub mod body;
pub mod error_mapping;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::sync::{watch, RwLock};
use tower_http::cors::CorsLayer;

use crate::http_logging::HttpLoggingLayer;
use crate::item::ItemStore;

/// Signal type for daemon shutdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    None,
    Shutdown,
}

/// State shared by every handler. The store is the single owner of the collection.
#[derive(Clone, Debug)]
pub struct AppState {
    store: Arc<RwLock<ItemStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<RwLock<ItemStore>> {
        &self.store
    }
}

/// Routes for the item collection, relative to the mount point.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::item_list::list_items)
                .post(handlers::item_create::create_item)
                .fallback(handlers::health::method_not_allowed),
        )
        .route(
            "/items/:id",
            get(handlers::item_read::get_item)
                .put(handlers::item_update::update_item)
                .delete(handlers::item_delete::delete_item)
                .fallback(handlers::health::method_not_allowed),
        )
}

/// Build the application router without CORS.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(item_routes())
        .nest("/api", item_routes())
        .route(
            "/healthz",
            get(handlers::health::healthz).fallback(handlers::health::method_not_allowed),
        )
        .fallback(handlers::health::not_found)
        .layer(HttpLoggingLayer)
        .with_state(state)
}

/// Build the application router wrapped in the given CORS layer.
#[must_use]
pub fn build_router_with_cors(state: AppState, cors: CorsLayer) -> Router {
    build_router(state).layer(cors)
}

/// Resolve once Ctrl-C or SIGTERM arrives, or a shutdown is requested on the channel.
pub async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<ShutdownSignal>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let requested = async {
        loop {
            if shutdown_rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
            if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
                break;
            }
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, stopping server..."),
        () = terminate => tracing::info!("Received SIGTERM, stopping server..."),
        () = requested => tracing::info!("Received shutdown signal, stopping server..."),
    }
}
