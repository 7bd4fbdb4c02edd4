use serde::{Deserialize, Serialize};

/// Capacity unit for nominal/current capacity values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CapacityUnit {
    #[default]
    #[serde(rename = "Ah")]
    AmpHours,
    #[serde(rename = "kWh")]
    KilowattHours,
    #[serde(rename = "Wh")]
    WattHours,
}

impl CapacityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityUnit::AmpHours => "Ah",
            CapacityUnit::KilowattHours => "kWh",
            CapacityUnit::WattHours => "Wh",
        }
    }
}

/// Fade evaluation result for a single profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FadeResult {
    /// Capacity lost to charge/discharge cycling, percent of nominal
    pub cycle_fade_pct: f64,
    /// Capacity lost to calendar aging, percent of nominal
    pub calendar_fade_pct: f64,
    /// Sum of both fade components
    pub total_fade_pct: f64,
    /// Model-predicted state of health (0-100)
    pub model_health_pct: f64,
    /// Measured state of health when a capacity reading was supplied,
    /// otherwise equal to `model_health_pct`
    pub observed_health_pct: f64,
    /// Estimated whole months until health crosses the EOL threshold
    pub estimated_months_to_eol: u32,
}

/// One sample on the capacity-vs-cycles trend curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrendPoint {
    pub cycle: u32,
    pub health_pct: f64,
    pub capacity: f64,
}

/// Prediction reliability grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// Reliability assessment derived from the calibration outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConfidenceAssessment {
    pub level: ConfidenceLevel,
    /// Accuracy band for the EOL estimate, e.g. "±2 months"
    pub accuracy: String,
    /// Human-readable reliability note
    pub note: String,
    /// Calibration factor the grade was derived from
    pub calibration_factor: f64,
}
