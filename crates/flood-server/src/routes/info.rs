use axum::extract::State;
use axum::Json;

use crate::state::AppState;

pub const TITLE: &str = "Village Flood Alert System";
pub const DESCRIPTION: &str = "Public Flood Alert Dashboard";

/// GET /api/info — service metadata and dataset extent, used by dashboards
/// to size the replay slider.
pub async fn get_info(State(app): State<AppState>) -> Json<serde_json::Value> {
    let ts = &app.dataset.timeseries;
    Json(serde_json::json!({
        "title": TITLE,
        "description": DESCRIPTION,
        "version": env!("CARGO_PKG_VERSION"),
        "hours": ts.len(),
        "first_date": ts.first_date(),
        "last_date": ts.last_date(),
        "villages": app.dataset.villages.len(),
    }))
}
