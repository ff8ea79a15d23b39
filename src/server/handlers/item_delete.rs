use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::item::{ItemError, MessageBody};
use crate::metrics::OperationTimer;
use crate::server::AppState;

pub const DELETED_MESSAGE: &str = "Item deleted successfully";

pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageBody>, ItemError> {
    let _timer = OperationTimer::new("delete_item");
    let Path(id) = path?;
    let removed = state.store().write().await.remove_by_id(&id)?;
    info!(item_id = %removed.id, "Deleted item");
    Ok(Json(MessageBody::new(DELETED_MESSAGE)))
}
