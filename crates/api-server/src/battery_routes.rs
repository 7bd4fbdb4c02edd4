//! Battery Health API Routes
//!
//! Endpoints for state-of-health analysis, trend projection and prediction
//! confidence.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use battery_core::{ConfidenceAssessment, FadeResult, ProfileInput, TrendPoint};
use degradation_model::{assess_confidence, build_trend, calibration_factor};
use health_report::{HealthReport, HealthReportBuilder};

use crate::{ApiResponse, AppError, AppState};

/// Full analysis response: single-point result plus curve and report
#[derive(Serialize, utoipa::ToSchema)]
pub struct BatteryAnalysisResponse {
    pub status: String,
    pub fade: FadeResult,
    pub calibration_factor: f64,
    pub confidence: ConfidenceAssessment,
    pub trend: Vec<TrendPoint>,
    pub report: HealthReport,
    pub unit: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TrendResponse {
    pub calibration_factor: f64,
    pub trend: Vec<TrendPoint>,
}

pub fn battery_routes() -> Router<AppState> {
    Router::new()
        .route("/api/battery/analyze", post(analyze_battery))
        .route("/api/battery/trend", post(battery_trend))
        .route("/api/battery/confidence", post(battery_confidence))
        .route("/api/health", get(health_check))
}

/// Run the full degradation analysis for a battery profile
#[utoipa::path(
    post,
    path = "/api/battery/analyze",
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Fade result, trend curve, confidence grade and health report"),
        (status = 400, description = "Missing or non-positive nominal_capacity")
    ),
    tag = "Battery"
)]
pub async fn analyze_battery(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<ApiResponse<BatteryAnalysisResponse>>, AppError> {
    let profile = input.resolve()?;
    let analysis = state.engine.analyze(&profile)?;
    let report = HealthReportBuilder::new(&profile, &analysis.fade).build();

    Ok(Json(ApiResponse::success(BatteryAnalysisResponse {
        status: report.status.as_str().to_string(),
        unit: profile.unit.as_str().to_string(),
        fade: analysis.fade,
        calibration_factor: analysis.calibration_factor,
        confidence: analysis.confidence,
        trend: analysis.trend,
        report,
    })))
}

/// Project the capacity-vs-cycles trend curve
#[utoipa::path(
    post,
    path = "/api/battery/trend",
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Ordered trend curve anchored at cycle 0 and the profile's cycle count"),
        (status = 400, description = "Missing or non-positive nominal_capacity")
    ),
    tag = "Battery"
)]
pub async fn battery_trend(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<ApiResponse<TrendResponse>>, AppError> {
    let profile = input.resolve()?;
    let model = state.engine.model();
    let factor = calibration_factor(model, &profile)?;
    let trend = build_trend(model, &profile)?;

    Ok(Json(ApiResponse::success(TrendResponse {
        calibration_factor: factor,
        trend,
    })))
}

/// Grade how reliable the prediction is for this profile
#[utoipa::path(
    post,
    path = "/api/battery/confidence",
    request_body = ProfileInput,
    responses(
        (status = 200, description = "High/medium/low grade with accuracy band"),
        (status = 400, description = "Missing or non-positive nominal_capacity")
    ),
    tag = "Battery"
)]
pub async fn battery_confidence(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<ApiResponse<ConfidenceAssessment>>, AppError> {
    let profile = input.resolve()?;
    let assessment = assess_confidence(state.engine.model(), &profile)?;
    Ok(Json(ApiResponse::success(assessment)))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up")),
    tag = "Battery"
)]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
