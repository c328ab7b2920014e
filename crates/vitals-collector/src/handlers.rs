//! HTTP request handlers: thin adapters between axum and the update protocol.
//!
//! All validation lives in `vitals_core::update`; this module only parses
//! path/body input and maps `VitalsError` onto HTTP statuses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use vitals_core::update::{apply_batch, apply_record};
use vitals_core::{MetricKind, MetricRecord, VitalsError};

use crate::app_state::AppState;

/// HTTP-facing wrapper so `?` works inside handlers.
pub struct ApiError(VitalsError);

impl From<VitalsError> for ApiError {
    fn from(err: VitalsError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            VitalsError::BadRequest(_) => StatusCode::BAD_REQUEST,
            VitalsError::NotFound => StatusCode::NOT_FOUND,
            VitalsError::Transport(_) => StatusCode::BAD_GATEWAY,
            VitalsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.0.to_string()).into_response()
    }
}

/// `POST /update/:kind/:name/:value` — positional update, value parsed per kind.
pub async fn update_path(
    State(app): State<AppState>,
    Path((kind, name, value)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let kind: MetricKind = kind.parse()?;
    match kind {
        MetricKind::Counter => {
            let delta: i64 = value
                .parse()
                .map_err(|_| VitalsError::BadRequest(format!("bad counter value: {value}")))?;
            app.store().update_counter(&name, delta);
        }
        MetricKind::Gauge => {
            let amount: f64 = value
                .parse()
                .map_err(|_| VitalsError::BadRequest(format!("bad gauge value: {value}")))?;
            app.store().update_gauge(&name, amount);
        }
    }
    info!(%kind, %name, %value, "positional update");
    Ok(StatusCode::OK)
}

/// `GET /value/:kind/:name` — plain-text current value.
pub async fn value_path(
    State(app): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let kind: MetricKind = kind.parse()?;
    Ok(app.store().value(kind, &name)?)
}

/// `POST /update` — structured single update; echoes the post-update record.
pub async fn update_json(
    State(app): State<AppState>,
    Json(record): Json<MetricRecord>,
) -> Result<Json<MetricRecord>, ApiError> {
    let echoed = apply_record(app.store(), &record)?;
    Ok(Json(echoed))
}

/// `POST /updates` — structured batch update.
///
/// Valid records apply regardless of invalid neighbors. The response body is
/// always the read-back array; any per-record failure downgrades the status
/// to 400 and the individual errors are logged, not returned.
pub async fn updates_json(
    State(app): State<AppState>,
    Json(records): Json<Vec<MetricRecord>>,
) -> Response {
    let outcome = apply_batch(app.store(), &records);
    for err in &outcome.errors {
        warn!(%err, "batch record rejected");
    }
    let status = if outcome.all_applied() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome.records)).into_response()
}

/// `POST /value` — structured query by id + kind.
pub async fn value_json(
    State(app): State<AppState>,
    Json(query): Json<MetricRecord>,
) -> Result<Json<MetricRecord>, ApiError> {
    if query.id.is_empty() {
        return Err(VitalsError::BadRequest("metric id is empty".into()).into());
    }
    let record = app
        .store()
        .record(query.kind, &query.id)
        .ok_or(VitalsError::NotFound)?;
    Ok(Json(record))
}

/// `GET /` — plain-text dump of the whole store.
pub async fn index(State(app): State<AppState>) -> String {
    app.store().render()
}
