use serde::{Deserialize, Serialize};

/// Status classification from state of health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum BatteryStatus {
    /// Near-new capacity
    Excellent,
    /// Normal wear, fully serviceable
    Good,
    /// Noticeable wear, still above the EOL threshold
    Fair,
    /// Below the EOL threshold, plan replacement
    Degraded,
    /// Severely worn, replace now
    Critical,
}

impl BatteryStatus {
    pub fn from_soh(soh_pct: f64) -> Self {
        match soh_pct {
            s if s >= 90.0 => BatteryStatus::Excellent,
            s if s >= 80.0 => BatteryStatus::Good,
            s if s >= 70.0 => BatteryStatus::Fair,
            s if s >= 60.0 => BatteryStatus::Degraded,
            _ => BatteryStatus::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryStatus::Excellent => "Excellent",
            BatteryStatus::Good => "Good",
            BatteryStatus::Fair => "Fair",
            BatteryStatus::Degraded => "Degraded",
            BatteryStatus::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BatteryStatus::Excellent => "#00cc88",
            BatteryStatus::Good => "#88cc00",
            BatteryStatus::Fair => "#ffaa00",
            BatteryStatus::Degraded => "#ff6600",
            BatteryStatus::Critical => "#ff3333",
        }
    }

    /// Whether this status sits below the 70 % end-of-life threshold.
    pub fn past_eol(&self) -> bool {
        matches!(self, BatteryStatus::Degraded | BatteryStatus::Critical)
    }
}
