use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::item::{Item, ItemError};
use crate::metrics::OperationTimer;
use crate::server::AppState;

pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Item>, ItemError> {
    let _timer = OperationTimer::new("get_item");
    let Path(id) = path?;
    let item = state.store().read().await.find_by_id(&id)?;
    Ok(Json(item))
}
