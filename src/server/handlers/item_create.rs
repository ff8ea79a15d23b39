use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::item::{validate_create, CreateItemRequest, Item, ItemError};
use crate::metrics::OperationTimer;
use crate::server::body::parse_json_body;
use crate::server::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let _timer = OperationTimer::new("create_item");
    let body = body?;
    let req: CreateItemRequest = parse_json_body(&body)?;
    let options = validate_create(req)?;

    let item = state.store().write().await.append(options);
    info!(item_id = %item.id, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}
