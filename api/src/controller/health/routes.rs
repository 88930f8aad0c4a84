use crate::infra::axum::AppJson;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn routes() -> Router {
        Router::new().route("/", get(health_handler))
    }
}

async fn health_handler() -> AppJson<HealthResponse> {
    debug!("GET /health");
    AppJson(HealthResponse { status: "up" })
}
