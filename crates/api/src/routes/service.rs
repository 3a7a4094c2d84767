//! Service-level routes mounted outside the versioned API: the landing
//! payload at `/` and the health probe at `/health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::API_PREFIX;
use crate::state::AppState;

const HEALTH_PATH: &str = "/health";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /` payload pointing clients at the API and the health probe.
#[derive(Debug, Serialize)]
pub struct Landing {
    pub message: &'static str,
    pub version: &'static str,
    pub api: &'static str,
    pub health: &'static str,
}

/// `GET /health` payload.
///
/// `status` is `"ok"` when the database answers and `"degraded"` otherwise;
/// the degraded form is served with 503 so load balancers can act on it.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl Health {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: VERSION,
            db_healthy,
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn landing() -> Json<Landing> {
    Json(Landing {
        message: "Welcome to the questboard mission system",
        version: VERSION,
        api: API_PREFIX,
        health: HEALTH_PATH,
    })
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let db_healthy = match questboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    let report = Health::new(db_healthy);
    (report.status_code(), Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route(HEALTH_PATH, get(health))
}
