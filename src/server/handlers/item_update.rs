use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::item::{validate_update, Item, ItemError, UpdateItemRequest};
use crate::metrics::OperationTimer;
use crate::server::body::parse_json_body;
use crate::server::AppState;

/// Shallow-merge the provided fields into an existing item.
///
/// An unknown id is reported before the body is looked at, so a bad body
/// against a missing item is still a 404.
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Item>, ItemError> {
    let _timer = OperationTimer::new("update_item");
    let Path(id) = path?;
    state.store().read().await.find_by_id(&id)?;

    let body = body?;
    let req: UpdateItemRequest = parse_json_body(&body)?;
    let options = validate_update(req)?;

    let item = state.store().write().await.replace_at(&id, &options)?;
    info!(item_id = %item.id, "Updated item");
    Ok(Json(item))
}
