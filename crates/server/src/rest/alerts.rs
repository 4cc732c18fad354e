use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::rest::AppState;
use crate::store::{AlertRecord, StoreError};

#[derive(Deserialize)]
pub struct SubmitAlertRequest {
    pub alert_id: String,
    pub service_id: String,
    pub service_name: String,
    pub model: String,
    pub alert_type: String,
    pub alert_ts: String,
    pub severity: String,
    pub team_slack: String,
}

#[derive(Serialize)]
pub struct SubmitAlertResponse {
    pub alert_id: String,
}

#[derive(Deserialize)]
pub struct RangeParams {
    pub start_ts: String,
    pub end_ts: String,
}

#[derive(Serialize)]
pub struct AlertResponse {
    pub alert_id: String,
    pub service_id: String,
    pub model: String,
    pub alert_type: String,
    pub alert_ts: String,
    pub severity: String,
    pub team_slack: String,
}

fn to_response(a: AlertRecord) -> AlertResponse {
    AlertResponse {
        alert_id: a.alert_id,
        service_id: a.service_id,
        model: a.model,
        alert_type: a.alert_type,
        alert_ts: a.alert_ts,
        severity: a.severity,
        team_slack: a.team_slack,
    }
}

pub async fn submit_alert(
    State(state): State<AppState>,
    Json(body): Json<SubmitAlertRequest>,
) -> Result<(StatusCode, Json<SubmitAlertResponse>), StatusCode> {
    let record = AlertRecord {
        alert_id: body.alert_id,
        service_id: body.service_id.clone(),
        model: body.model,
        alert_type: body.alert_type,
        alert_ts: body.alert_ts,
        severity: body.severity,
        team_slack: body.team_slack,
    };

    match state.store.submit(record, &body.service_name).await {
        Ok(alert_id) => Ok((StatusCode::CREATED, Json(SubmitAlertResponse { alert_id }))),
        Err(e) => {
            tracing::error!(service_id = %body.service_id, "alert submission failed: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn query_alerts(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(range): Query<RangeParams>,
) -> Result<Json<Vec<AlertResponse>>, StatusCode> {
    match state
        .store
        .query(&service_id, &range.start_ts, &range.end_ts)
        .await
    {
        Ok(alerts) => Ok(Json(alerts.into_iter().map(to_response).collect())),
        Err(StoreError::ServiceNotFound | StoreError::NoAlertsInRange) => {
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(%service_id, "alert query failed: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
