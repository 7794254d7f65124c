use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/map/villages — every village boundary as a GeoJSON FeatureCollection.
pub async fn get_villages(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = serde_json::to_value(app.dataset.villages.to_feature_collection())?;
    Ok(Json(collection))
}
