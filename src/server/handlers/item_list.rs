use axum::extract::State;
use axum::Json;

use crate::item::Item;
use crate::metrics::OperationTimer;
use crate::server::AppState;

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let _timer = OperationTimer::new("list_items");
    let items = state.store().read().await.list_all();
    Json(items)
}
