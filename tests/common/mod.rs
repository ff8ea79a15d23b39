//! Common test utilities
#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use items_daemon::console::{ConsoleError, ItemsApi};
use items_daemon::item::{
    validate_create, validate_update, CreateItemRequest, IdPolicy, Item, ItemStore, MessageBody,
    UpdateItemRequest,
};
use items_daemon::server::{build_router, AppState, ShutdownSignal};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower::ServiceExt;

/// Router over a seeded store using the given id policy.
#[allow(dead_code)]
pub fn seeded_router(policy: IdPolicy) -> Router {
    build_router(AppState::new(ItemStore::seeded(policy)))
}

/// Send one request through the router and decode the JSON response body.
#[allow(dead_code)]
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body should be JSON")
    };
    (status, json)
}

/// Bind the router on an ephemeral port. Returns the base URL and the shutdown sender.
#[allow(dead_code)]
pub async fn spawn_server(state: AppState) -> (String, watch::Sender<ShutdownSignal>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    tokio::spawn(items_daemon::serve(listener, build_router(state), shutdown_rx));
    (format!("http://{addr}"), shutdown_tx)
}

/// In-memory `ItemsApi` backed by a real store, with switchable failures.
#[allow(dead_code)]
pub struct FakeApi {
    store: Mutex<ItemStore>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    pub list_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn seeded() -> Self {
        Self {
            store: Mutex::new(ItemStore::seeded(IdPolicy::Counter)),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn server_items(&self) -> Vec<Item> {
        self.store.lock().unwrap().list_all()
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check_writes(&self) -> Result<(), ConsoleError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ConsoleError::Api {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

fn api_error(err: &items_daemon::ItemError) -> ConsoleError {
    let status = match err {
        items_daemon::ItemError::NotFound(_) => 404,
        _ => 400,
    };
    ConsoleError::Api {
        status,
        message: err.to_string(),
    }
}

#[async_trait]
impl ItemsApi for FakeApi {
    async fn list_items(&self) -> Result<Vec<Item>, ConsoleError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ConsoleError::Api {
                status: 503,
                message: "injected failure".to_string(),
            });
        }
        Ok(self.server_items())
    }

    async fn create_item(&self, name: &str, description: &str) -> Result<Item, ConsoleError> {
        self.check_writes()?;
        let options = validate_create(CreateItemRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        })
        .map_err(|e| api_error(&e))?;
        Ok(self.store.lock().unwrap().append(options))
    }

    async fn update_item(
        &self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<Item, ConsoleError> {
        self.check_writes()?;
        let options = validate_update(UpdateItemRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        })
        .map_err(|e| api_error(&e))?;
        self.store
            .lock()
            .unwrap()
            .replace_at(id, &options)
            .map_err(|e| api_error(&e))
    }

    async fn delete_item(&self, id: &str) -> Result<MessageBody, ConsoleError> {
        self.check_writes()?;
        self.store
            .lock()
            .unwrap()
            .remove_by_id(id)
            .map_err(|e| api_error(&e))?;
        Ok(MessageBody::new("Item deleted successfully"))
    }
}
