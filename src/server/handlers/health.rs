use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::item::MessageBody;
use crate::server::AppState;

pub async fn healthz(State(state): State<AppState>) -> Json<Value> {
    let items = state.store().read().await.len();
    Json(json!({ "status": "ok", "items": items }))
}

pub async fn not_found() -> (StatusCode, Json<MessageBody>) {
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Not found")))
}

pub async fn method_not_allowed() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageBody::new("Method not allowed")),
    )
}
