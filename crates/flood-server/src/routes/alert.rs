use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use flood_core::timeseries::parse_hour;
use flood_core::AlertReport;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct AlertParams {
    pub hour: Option<String>,
}

/// GET /api/alert?hour=N — alert tier and affected villages for one replay hour.
///
/// `hour` defaults to 0. Hours past the end of the series, however large,
/// hold at the last row; negative or non-integer hours are rejected with 400.
pub async fn get_alert(
    State(app): State<AppState>,
    params: Result<Query<AlertParams>, QueryRejection>,
) -> Result<Json<AlertReport>, AppError> {
    let Query(params) =
        params.map_err(|e| AppError::bad_request(format!("invalid query: {}", e.body_text())))?;
    let hour = match params.hour.as_deref() {
        Some(raw) => parse_hour(raw)?,
        None => 0,
    };

    Ok(Json(app.dataset.alert_at(hour)))
}
