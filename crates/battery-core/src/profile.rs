use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::types::CapacityUnit;

const DEFAULT_CHARGE_CYCLES: u32 = 0;
const DEFAULT_AVG_TEMPERATURE_C: f64 = 25.0;
const DEFAULT_DOD_PCT: f64 = 80.0;
const DEFAULT_C_RATE: f64 = 0.8;

const TEMPERATURE_RANGE_C: (f64, f64) = (-40.0, 80.0);
const DOD_RANGE_PCT: (f64, f64) = (10.0, 100.0);
const C_RATE_RANGE: (f64, f64) = (0.1, 5.0);

/// Fully resolved battery usage profile.
///
/// Every field is populated and range-checked; core functions assume this
/// record is valid apart from the `nominal_capacity > 0` precondition,
/// which [`BatteryProfile::ensure_valid`] re-checks at each entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BatteryProfile {
    pub charge_cycles: u32,
    pub avg_temperature_c: f64,
    pub nominal_capacity: f64,
    /// Most recent measured capacity, same unit as `nominal_capacity`
    pub current_capacity: Option<f64>,
    pub dod_pct: f64,
    pub c_rate: f64,
    pub calendar_age_years: f64,
    pub unit: CapacityUnit,
}

impl BatteryProfile {
    /// Check the single hard precondition of the model.
    pub fn ensure_valid(&self) -> Result<(), ModelError> {
        if !self.nominal_capacity.is_finite() || self.nominal_capacity <= 0.0 {
            return Err(ModelError::InvalidProfile(format!(
                "nominal_capacity must be a positive number, got {}",
                self.nominal_capacity
            )));
        }
        Ok(())
    }

    pub fn calendar_age_months(&self) -> f64 {
        self.calendar_age_years * 12.0
    }

    /// Measured state of health, clamped to 0-100. None without a reading.
    pub fn measured_health_pct(&self) -> Option<f64> {
        self.current_capacity
            .map(|c| (c / self.nominal_capacity * 100.0).clamp(0.0, 100.0))
    }

    /// Copy of this profile with the capacity measurement removed.
    pub fn without_measurement(&self) -> BatteryProfile {
        BatteryProfile {
            current_capacity: None,
            ..self.clone()
        }
    }
}

/// Raw profile as supplied by a caller, every field independently optional.
///
/// [`ProfileInput::resolve`] applies defaults and clamps out-of-range values
/// once, so the core never re-validates ranges. Only a missing or
/// non-positive `nominal_capacity` is an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileInput {
    #[serde(default)]
    pub charge_cycles: Option<i64>,
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    pub nominal_capacity: Option<f64>,
    #[serde(default)]
    pub current_capacity: Option<f64>,
    #[serde(default)]
    pub dod_pct: Option<f64>,
    #[serde(default)]
    pub c_rate: Option<f64>,
    #[serde(default)]
    pub calendar_age_months: Option<f64>,
    #[serde(default)]
    pub calendar_age_years: Option<f64>,
    #[serde(default)]
    pub unit: Option<CapacityUnit>,
}

impl ProfileInput {
    pub fn resolve(self) -> Result<BatteryProfile, ModelError> {
        let nominal_capacity = self
            .nominal_capacity
            .ok_or_else(|| ModelError::InvalidProfile("nominal_capacity is required".into()))?;
        if !nominal_capacity.is_finite() || nominal_capacity <= 0.0 {
            return Err(ModelError::InvalidProfile(format!(
                "nominal_capacity must be a positive number, got {nominal_capacity}"
            )));
        }

        // Months take precedence when both age fields are present.
        let calendar_age_years = self
            .calendar_age_months
            .filter(|m| m.is_finite())
            .map(|m| m / 12.0)
            .or(self.calendar_age_years.filter(|y| y.is_finite()))
            .unwrap_or(0.0)
            .max(0.0);

        Ok(BatteryProfile {
            charge_cycles: self
                .charge_cycles
                .map(|c| c.max(0).min(u32::MAX as i64) as u32)
                .unwrap_or(DEFAULT_CHARGE_CYCLES),
            avg_temperature_c: clamp_or_default(
                self.avg_temperature,
                TEMPERATURE_RANGE_C,
                DEFAULT_AVG_TEMPERATURE_C,
            ),
            nominal_capacity,
            current_capacity: self
                .current_capacity
                .filter(|c| c.is_finite())
                .map(|c| c.max(0.0)),
            dod_pct: clamp_or_default(self.dod_pct, DOD_RANGE_PCT, DEFAULT_DOD_PCT),
            c_rate: clamp_or_default(self.c_rate, C_RATE_RANGE, DEFAULT_C_RATE),
            calendar_age_years,
            unit: self.unit.unwrap_or_default(),
        })
    }
}

fn clamp_or_default(value: Option<f64>, range: (f64, f64), default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(range.0, range.1),
        _ => default,
    }
}
