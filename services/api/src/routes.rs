use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use lendwise::error::AppError;
use lendwise::lending::navigation::{NavigationTab, NavigationView};
use lendwise::lending::portfolio::{DashboardSnapshot, LoanDetail, RiskAnalysisView};
use lendwise::lending::settings::{SettingsService, UserSettings};
use lendwise::lending::underwriting::{underwriting_router, LoanApplicationService, SubmissionLog};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    #[serde(default)]
    pub(crate) tab: Option<String>,
}

pub(crate) fn with_lending_routes<L>(service: Arc<LoanApplicationService<L>>) -> axum::Router
where
    L: SubmissionLog + 'static,
{
    underwriting_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/navigation", get(navigation_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/risk-analysis", get(risk_analysis_endpoint))
        .route(
            "/api/v1/risk-analysis/loans/:loan_id",
            get(loan_detail_endpoint),
        )
        .route(
            "/api/v1/settings",
            get(settings_endpoint).put(save_settings_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn navigation_endpoint(
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationView> {
    let tab = query
        .tab
        .as_deref()
        .map(NavigationTab::from_slug)
        .unwrap_or_default();
    Json(NavigationView::for_tab(tab))
}

pub(crate) async fn dashboard_endpoint() -> Json<DashboardSnapshot> {
    Json(DashboardSnapshot::sample())
}

pub(crate) async fn risk_analysis_endpoint() -> Json<RiskAnalysisView> {
    Json(RiskAnalysisView::sample())
}

pub(crate) async fn loan_detail_endpoint(
    Path(loan_id): Path<u32>,
) -> Result<Json<LoanDetail>, AppError> {
    RiskAnalysisView::sample()
        .loan(loan_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("loan {loan_id}")))
}

pub(crate) async fn settings_endpoint() -> Json<UserSettings> {
    Json(SettingsService.current())
}

pub(crate) async fn save_settings_endpoint(
    Json(settings): Json<UserSettings>,
) -> Json<UserSettings> {
    Json(SettingsService.save(settings))
}
