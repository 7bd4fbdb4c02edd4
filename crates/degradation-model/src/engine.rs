use serde::Serialize;

use battery_core::{
    BatteryProfile, ConfidenceAssessment, FadeCoefficients, FadeResult, ModelError, TrendPoint,
};

use crate::calibration::calibration_factor;
use crate::confidence::assess_confidence;
use crate::fade::FadeModel;
use crate::trend::build_trend;

/// Combined output of one full degradation analysis.
#[derive(Debug, Clone, Serialize)]
pub struct BatteryAnalysis {
    pub fade: FadeResult,
    pub calibration_factor: f64,
    pub trend: Vec<TrendPoint>,
    pub confidence: ConfidenceAssessment,
}

/// Front door for callers that want the whole picture at once: calibrated
/// fade, trend curve and confidence grade from a single profile.
pub struct DegradationEngine {
    model: FadeModel,
}

impl Default for DegradationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationEngine {
    pub fn new() -> Self {
        Self {
            model: FadeModel::new(),
        }
    }

    pub fn with_coefficients(coefficients: FadeCoefficients) -> Self {
        Self {
            model: FadeModel::with_coefficients(coefficients),
        }
    }

    pub fn model(&self) -> &FadeModel {
        &self.model
    }

    pub fn analyze(&self, profile: &BatteryProfile) -> Result<BatteryAnalysis, ModelError> {
        profile.ensure_valid()?;

        let factor = calibration_factor(&self.model, profile)?;
        let fade = self.model.evaluate(profile, factor)?;
        let trend = build_trend(&self.model, profile)?;
        let confidence = assess_confidence(&self.model, profile)?;

        tracing::debug!(
            observed_health_pct = fade.observed_health_pct,
            calibration_factor = factor,
            trend_points = trend.len(),
            "battery degradation analysis complete"
        );

        Ok(BatteryAnalysis {
            fade,
            calibration_factor: factor,
            trend,
            confidence,
        })
    }
}
