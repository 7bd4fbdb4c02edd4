use battery_core::{BatteryProfile, ModelError};

use crate::fade::FadeModel;

pub const MIN_CALIBRATION_FACTOR: f64 = 0.1;
pub const MAX_CALIBRATION_FACTOR: f64 = 3.0;

/// Below this cycle count a measurement carries too little signal to
/// calibrate against safely.
pub const MIN_CYCLES_FOR_CALIBRATION: u32 = 50;

/// Model fade below this is treated as negligible to avoid dividing by a
/// near-zero denominator.
const MIN_MODEL_FADE_PCT: f64 = 0.1;

/// Derive a calibration factor by comparing the uncalibrated model against
/// the measured capacity.
///
/// This is a one-shot correction: it rescales both fade components
/// uniformly rather than fitting them independently, trading fidelity for
/// stability and determinism. Returns 1.0 (no-op) when there is no
/// measurement, too little cycle history, or negligible predicted fade.
pub fn calibration_factor(
    model: &FadeModel,
    profile: &BatteryProfile,
) -> Result<f64, ModelError> {
    profile.ensure_valid()?;

    let Some(measured_health_pct) = profile.measured_health_pct() else {
        return Ok(1.0);
    };
    if profile.charge_cycles < MIN_CYCLES_FOR_CALIBRATION {
        return Ok(1.0);
    }

    let uncalibrated = model.evaluate(&profile.without_measurement(), 1.0)?;
    let model_fade_pct = 100.0 - uncalibrated.model_health_pct;
    if model_fade_pct < MIN_MODEL_FADE_PCT {
        return Ok(1.0);
    }

    let actual_fade_pct = 100.0 - measured_health_pct;
    let factor =
        (actual_fade_pct / model_fade_pct).clamp(MIN_CALIBRATION_FACTOR, MAX_CALIBRATION_FACTOR);
    tracing::debug!(
        model_fade_pct,
        actual_fade_pct,
        factor,
        "calibrated fade model against capacity measurement"
    );
    Ok(factor)
}
