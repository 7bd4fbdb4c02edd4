use battery_core::{BatteryProfile, FadeCoefficients, FadeResult, ModelError};

const KELVIN_OFFSET: f64 = 273.15;

/// Minimum elapsed age used when projecting the fade rate forward, so a
/// brand-new battery does not produce a runaway EOL estimate.
const MIN_ELAPSED_YEARS: f64 = 0.1;
const MIN_MONTHLY_FADE_RATE: f64 = 0.05;

/// Physics-inspired capacity fade model.
///
/// Cycle fade grows with the square root of cycle count, scaled by depth of
/// discharge and charge-rate stress. Calendar fade follows an Arrhenius
/// temperature dependence over calendar age. Both components are scaled by a
/// dimensionless calibration factor (1.0 = uncalibrated).
pub struct FadeModel {
    coefficients: FadeCoefficients,
}

impl Default for FadeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeModel {
    pub fn new() -> Self {
        Self {
            coefficients: FadeCoefficients::default(),
        }
    }

    pub fn with_coefficients(coefficients: FadeCoefficients) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &FadeCoefficients {
        &self.coefficients
    }

    /// Evaluate fade and health for a single profile.
    ///
    /// Fails only when the profile violates the `nominal_capacity > 0`
    /// precondition; everything else has been clamped upstream.
    pub fn evaluate(
        &self,
        profile: &BatteryProfile,
        calibration_factor: f64,
    ) -> Result<FadeResult, ModelError> {
        profile.ensure_valid()?;

        let cycle_fade_pct = self.cycle_fade_pct(profile, calibration_factor);
        let calendar_fade_pct = self.calendar_fade_pct(profile, calibration_factor);
        let total_fade_pct = cycle_fade_pct + calendar_fade_pct;

        let model_health_pct = (100.0 - total_fade_pct).max(0.0);
        let observed_health_pct = profile.measured_health_pct().unwrap_or(model_health_pct);
        let estimated_months_to_eol = self.months_to_eol(profile, observed_health_pct);

        Ok(FadeResult {
            cycle_fade_pct,
            calendar_fade_pct,
            total_fade_pct,
            model_health_pct,
            observed_health_pct,
            estimated_months_to_eol,
        })
    }

    fn cycle_fade_pct(&self, profile: &BatteryProfile, calibration_factor: f64) -> f64 {
        let c = &self.coefficients;
        let dod_factor = (profile.dod_pct / 100.0).powf(c.dod_exponent);
        let c_rate_accel = 1.0 + (profile.c_rate - 1.0).max(0.0) * c.c_rate_penalty;
        let k_c = c.cycle_fade_base * calibration_factor;
        let fraction = k_c * dod_factor * (profile.charge_cycles as f64).sqrt() * c_rate_accel;
        (fraction * 100.0).max(0.0)
    }

    fn calendar_fade_pct(&self, profile: &BatteryProfile, calibration_factor: f64) -> f64 {
        let years = profile.calendar_age_years;
        if years <= 0.0 {
            return 0.0;
        }
        let c = &self.coefficients;
        let kelvin = profile.avg_temperature_c + KELVIN_OFFSET;
        let arrhenius = (-c.activation_energy / (c.gas_constant * kelvin)).exp();
        let k_t = c.calendar_fade_base * calibration_factor;
        let fraction = k_t * arrhenius * years.powf(c.calendar_exponent);
        (fraction * 100.0).max(0.0)
    }

    /// Remaining life from the fade accumulated so far, treated as a rate
    /// over elapsed time and projected down to the EOL threshold.
    fn months_to_eol(&self, profile: &BatteryProfile, observed_health_pct: f64) -> u32 {
        let months_elapsed = (profile.calendar_age_years.max(MIN_ELAPSED_YEARS) * 12.0).max(1.0);
        let monthly_fade_rate =
            ((100.0 - observed_health_pct) / months_elapsed).max(MIN_MONTHLY_FADE_RATE);
        let months = (observed_health_pct - self.coefficients.eol_threshold_pct) / monthly_fade_rate;
        months.max(0.0).round() as u32
    }
}
