use battery_core::{BatteryProfile, ModelError, TrendPoint};

use crate::calibration::calibration_factor;
use crate::fade::FadeModel;

/// Floor on the sampling step so small cycle counts are not sampled
/// pointlessly densely.
const MIN_STEP_CYCLES: u32 = 25;
/// Target number of interior samples regardless of cycle count.
const TARGET_SAMPLES: u32 = 20;

/// Build the capacity-vs-cycles trend curve for a profile.
///
/// The sweep re-evaluates the fade model at each sampled cycle count with
/// calendar age scaled proportionally and the calibration factor computed
/// once for the whole profile. The measured capacity is deliberately left
/// out of every sample, including the terminal one: the curve stays
/// model-pure and smooth instead of snapping to the measurement at the end.
///
/// The first point is always `{0, 100, nominal}` and the last point always
/// lands exactly on the profile's cycle count, whatever the step size.
pub fn build_trend(
    model: &FadeModel,
    profile: &BatteryProfile,
) -> Result<Vec<TrendPoint>, ModelError> {
    profile.ensure_valid()?;

    let factor = calibration_factor(model, profile)?;
    let total_cycles = profile.charge_cycles;
    let total_years = profile.calendar_age_years;
    let step = (total_cycles / TARGET_SAMPLES).max(MIN_STEP_CYCLES);

    let mut sweep = profile.without_measurement();
    let mut points = Vec::with_capacity((total_cycles / step + 2) as usize);

    let mut cycle = 0u32;
    loop {
        if cycle > total_cycles {
            break;
        }
        // Scale elapsed calendar time proportionally along the sweep.
        let years = total_years * (cycle as f64 / total_cycles.max(1) as f64);
        points.push(sample(model, &mut sweep, cycle, factor, years)?);
        match cycle.checked_add(step) {
            Some(next) => cycle = next,
            None => break,
        }
    }

    // The step rarely lands exactly on the end; anchor the terminal point
    // at the true cycle count and calendar age.
    if points.last().map(|p| p.cycle) != Some(total_cycles) {
        points.push(sample(model, &mut sweep, total_cycles, factor, total_years)?);
    }

    Ok(points)
}

fn sample(
    model: &FadeModel,
    sweep: &mut BatteryProfile,
    cycle: u32,
    factor: f64,
    years: f64,
) -> Result<TrendPoint, ModelError> {
    sweep.charge_cycles = cycle;
    sweep.calendar_age_years = years;
    let fade = model.evaluate(sweep, factor)?;
    let health_pct = round2(fade.model_health_pct);
    Ok(TrendPoint {
        cycle,
        health_pct,
        capacity: round2(health_pct / 100.0 * sweep.nominal_capacity),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_core::ProfileInput;

    fn profile(cycles: i64) -> BatteryProfile {
        ProfileInput {
            nominal_capacity: Some(100.0),
            charge_cycles: Some(cycles),
            calendar_age_months: Some(24.0),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn trend_is_anchored_at_both_endpoints() {
        let model = FadeModel::new();
        for cycles in [0, 1, 24, 25, 26, 100, 499, 500, 550, 10_000] {
            let trend = build_trend(&model, &profile(cycles)).unwrap();
            let first = trend.first().unwrap();
            let last = trend.last().unwrap();

            assert_eq!(first.cycle, 0);
            assert_eq!(first.health_pct, 100.0);
            assert_eq!(first.capacity, 100.0);
            assert_eq!(last.cycle, cycles as u32);
        }
    }

    #[test]
    fn trend_cycles_are_strictly_ascending() {
        let model = FadeModel::new();
        let trend = build_trend(&model, &profile(1234)).unwrap();
        for pair in trend.windows(2) {
            assert!(pair[1].cycle > pair[0].cycle);
        }
    }

    #[test]
    fn trend_health_never_increases() {
        let model = FadeModel::new();
        let trend = build_trend(&model, &profile(2000)).unwrap();
        for pair in trend.windows(2) {
            assert!(pair[1].health_pct <= pair[0].health_pct);
            assert!(pair[1].capacity <= pair[0].capacity);
        }
    }

    #[test]
    fn step_floor_keeps_small_sweeps_sparse() {
        let model = FadeModel::new();
        // 100 cycles at the 25-cycle floor: 0, 25, 50, 75, 100
        let trend = build_trend(&model, &profile(100)).unwrap();
        let cycles: Vec<u32> = trend.iter().map(|p| p.cycle).collect();
        assert_eq!(cycles, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn large_sweeps_keep_roughly_twenty_samples() {
        let model = FadeModel::new();
        let trend = build_trend(&model, &profile(100_000)).unwrap();
        assert!(trend.len() >= 20 && trend.len() <= 22);
    }

    #[test]
    fn terminal_point_ignores_the_measurement() {
        let model = FadeModel::new();
        let mut p = profile(550);
        p.current_capacity = Some(84.0);

        let trend = build_trend(&model, &p).unwrap();
        let last = trend.last().unwrap();

        // Calibration pulls the terminal model health onto the measured
        // value here, but the point itself is computed from the model, not
        // copied from the measurement.
        assert_eq!(last.cycle, 550);
        assert!((last.health_pct - 84.0).abs() < 0.01);

        let uncalibrated = build_trend(&model, &p.without_measurement()).unwrap();
        assert!(uncalibrated.last().unwrap().health_pct < last.health_pct);
    }
}
