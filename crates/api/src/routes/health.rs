//! Liveness and schema readiness at `/health`.
//!
//! Reports `ok` only when the database answers and the newest applied
//! migration matches the newest migration embedded in this build.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration applied to the database.
    pub schema_version: Option<i64>,
    /// Newest migration this build expects.
    pub expected_schema_version: Option<i64>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let expected_schema_version = soundverse_db::expected_schema_version();

    let (db_healthy, schema_version) =
        match soundverse_db::applied_schema_version(&state.pool).await {
            Ok(version) => (true, version),
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not reach the database");
                (false, None)
            }
        };

    let schema_current = schema_version.is_some() && schema_version == expected_schema_version;
    if db_healthy && !schema_current {
        tracing::warn!(?schema_version, ?expected_schema_version, "Database schema is behind");
    }

    Json(HealthResponse {
        status: if db_healthy && schema_current { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        expected_schema_version,
    })
}

/// Routes mounted at the root, outside `/api/v1`.
///
/// ```text
/// GET    /health    -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
