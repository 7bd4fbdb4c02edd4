use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use battery_core::{BatteryProfile, FadeResult};

use crate::status::BatteryStatus;

const THERMAL_WARN_C: f64 = 35.0;
const THERMAL_CRITICAL_C: f64 = 45.0;
const DEEP_DISCHARGE_PCT: f64 = 90.0;
const FAST_CHARGE_C_RATE: f64 = 2.0;
const EOL_WARN_MONTHS: u32 = 12;
const EOL_CRITICAL_MONTHS: u32 = 6;

/// Complete health report for a battery
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthReport {
    pub status: BatteryStatus,
    pub soh_pct: f64,
    pub cycle_fade_pct: f64,
    pub calendar_fade_pct: f64,
    pub estimated_months_to_eol: u32,
    pub alerts: Vec<HealthAlert>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// An alert about battery condition or usage stress
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthAlert {
    pub severity: AlertSeverity,
    pub category: AlertCategory,
    pub message: String,
    pub metric_name: String,
    pub current_value: f64,
    pub threshold_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum AlertCategory {
    ThermalStress,
    DeepDischarge,
    FastCharging,
    EolApproaching,
}

/// Builder for generating health reports
pub struct HealthReportBuilder<'a> {
    profile: &'a BatteryProfile,
    fade: &'a FadeResult,
}

impl<'a> HealthReportBuilder<'a> {
    pub fn new(profile: &'a BatteryProfile, fade: &'a FadeResult) -> Self {
        Self { profile, fade }
    }

    pub fn build(self) -> HealthReport {
        let soh_pct = self.fade.observed_health_pct;
        let status = BatteryStatus::from_soh(soh_pct);
        let alerts = self.generate_alerts(status);
        let recommendations = self.generate_recommendations(status, &alerts);

        HealthReport {
            status,
            soh_pct,
            cycle_fade_pct: self.fade.cycle_fade_pct,
            calendar_fade_pct: self.fade.calendar_fade_pct,
            estimated_months_to_eol: self.fade.estimated_months_to_eol,
            alerts,
            recommendations,
            generated_at: Utc::now(),
        }
    }

    fn generate_alerts(&self, status: BatteryStatus) -> Vec<HealthAlert> {
        let mut alerts = Vec::new();

        let temp = self.profile.avg_temperature_c;
        if temp > THERMAL_WARN_C {
            alerts.push(HealthAlert {
                severity: if temp > THERMAL_CRITICAL_C {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                },
                category: AlertCategory::ThermalStress,
                message: format!(
                    "Average operating temperature of {temp:.0} °C accelerates calendar aging"
                ),
                metric_name: "avg_temperature_c".to_string(),
                current_value: temp,
                threshold_value: THERMAL_WARN_C,
            });
        }

        if self.profile.dod_pct > DEEP_DISCHARGE_PCT {
            alerts.push(HealthAlert {
                severity: AlertSeverity::Warning,
                category: AlertCategory::DeepDischarge,
                message: format!(
                    "Typical depth of discharge of {:.0} % wears cells faster than shallow cycling",
                    self.profile.dod_pct
                ),
                metric_name: "dod_pct".to_string(),
                current_value: self.profile.dod_pct,
                threshold_value: DEEP_DISCHARGE_PCT,
            });
        }

        if self.profile.c_rate > FAST_CHARGE_C_RATE {
            alerts.push(HealthAlert {
                severity: AlertSeverity::Warning,
                category: AlertCategory::FastCharging,
                message: format!(
                    "Charge rate of {:.1}C adds cycling stress",
                    self.profile.c_rate
                ),
                metric_name: "c_rate".to_string(),
                current_value: self.profile.c_rate,
                threshold_value: FAST_CHARGE_C_RATE,
            });
        }

        let months = self.fade.estimated_months_to_eol;
        if !status.past_eol() && months < EOL_WARN_MONTHS {
            alerts.push(HealthAlert {
                severity: if months < EOL_CRITICAL_MONTHS {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                },
                category: AlertCategory::EolApproaching,
                message: format!(
                    "At the current fade rate the battery reaches end of life in about {months} months"
                ),
                metric_name: "estimated_months_to_eol".to_string(),
                current_value: months as f64,
                threshold_value: EOL_WARN_MONTHS as f64,
            });
        }

        alerts
    }

    fn generate_recommendations(
        &self,
        status: BatteryStatus,
        alerts: &[HealthAlert],
    ) -> Vec<String> {
        let mut recs = Vec::new();

        match status {
            BatteryStatus::Excellent => {
                recs.push("Battery is in excellent condition. No action needed.".to_string());
            }
            BatteryStatus::Good => {
                recs.push("Battery is healthy. Continue normal usage.".to_string());
            }
            BatteryStatus::Fair => {
                recs.push("Wear is becoming noticeable. Re-check capacity every few months.".to_string());
                recs.push("Budget for a replacement within the next year or two.".to_string());
            }
            BatteryStatus::Degraded => {
                recs.push("Capacity is below the end-of-life threshold. Plan replacement soon.".to_string());
                recs.push("Expect reduced runtime and derate any load sizing accordingly.".to_string());
            }
            BatteryStatus::Critical => {
                recs.push("Battery is severely worn and should be replaced now.".to_string());
                recs.push("Continued use risks unexpected shutdowns under load.".to_string());
            }
        }

        for alert in alerts {
            match alert.category {
                AlertCategory::ThermalStress => recs.push(
                    "Improve cooling or relocate the pack; every 10 °C roughly doubles aging."
                        .to_string(),
                ),
                AlertCategory::DeepDischarge => recs.push(
                    "Recharge before deep depletion; shallower cycles extend cycle life."
                        .to_string(),
                ),
                AlertCategory::FastCharging => recs.push(
                    "Use a slower charger when time allows to reduce cycling stress.".to_string(),
                ),
                AlertCategory::EolApproaching => {}
            }
        }

        recs
    }
}
