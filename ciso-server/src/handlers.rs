//! HTTP request handlers

use crate::api::{ControlsCoverage, DashboardMetrics, ExecutiveKpis, HealthResponse, IncidentPoint};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{extract::State, http::Uri, Json};
use tracing::debug;

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// KPIs, incident trend and controls in a single payload
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardMetrics>> {
    let metrics = state.generator.dashboard()?;
    crate::metrics::record_incident_draws(metrics.incidents.len());
    debug!(
        incidents = metrics.incidents.len(),
        "Dashboard metrics generated"
    );
    Ok(Json(metrics))
}

/// Executive KPI snapshot
pub async fn kpis(State(state): State<AppState>) -> Json<ExecutiveKpis> {
    Json(state.generator.executive_kpis())
}

/// Incident trend over the default window
pub async fn incidents(State(state): State<AppState>) -> ApiResult<Json<Vec<IncidentPoint>>> {
    let trend = state.generator.default_incident_trend()?;
    crate::metrics::record_incident_draws(trend.len());
    Ok(Json(trend))
}

/// Controls coverage map
pub async fn controls(State(state): State<AppState>) -> Json<ControlsCoverage> {
    Json(state.generator.controls_coverage())
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use chrono::{TimeZone, Utc};
    use ciso_core::{FixedClock, MetricsGenerator};
    use std::sync::Arc;

    fn test_state() -> AppState {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        AppState::new(Arc::new(
            MetricsGenerator::new().with_clock(FixedClock(now)),
        ))
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body, HealthResponse::ok());
    }

    #[tokio::test]
    async fn test_incidents_consume_the_shared_stream() {
        let state = test_state();
        let Json(first) = incidents(State(state.clone())).await.unwrap();
        let Json(second) = incidents(State(state.clone())).await.unwrap();

        assert_eq!(first.len(), 30);
        assert_eq!(second.len(), 30);
        assert_eq!(state.generator.draws(), 60);
    }

    #[tokio::test]
    async fn test_dashboard_matches_standalone_parts() {
        let state = test_state();
        let Json(bundle) = dashboard(State(state.clone())).await.unwrap();
        let Json(kpis) = kpis(State(state.clone())).await;
        let Json(controls) = controls(State(state)).await;

        assert_eq!(bundle.kpis, kpis);
        assert_eq!(bundle.controls, controls);
        assert_eq!(bundle.incidents.len(), 30);
    }

    #[tokio::test]
    async fn test_not_found() {
        let uri: Uri = "/compliance".parse().unwrap();
        let response = not_found(uri).await.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
