use axum::Router;
use axum::routing::{get, post};

use crate::store::AlertStore;
use super::{alerts, health};

#[derive(Clone)]
pub struct AppState {
    pub store: AlertStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/ready", get(health::ready))
        .route("/v1/alerts", post(alerts::submit_alert))
        .route("/v1/alerts/{service_id}", get(alerts::query_alerts))
        .with_state(state)
}
