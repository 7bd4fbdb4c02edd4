#[cfg(test)]
mod tests {
    use super::super::*;
    use battery_core::{ConfidenceLevel, ProfileInput};

    /// The worked reference scenario: a 100 Ah pack measured at 84 Ah after
    /// 550 cycles and two years at 32 °C.
    fn reference_profile() -> battery_core::BatteryProfile {
        ProfileInput {
            nominal_capacity: Some(100.0),
            current_capacity: Some(84.0),
            charge_cycles: Some(550),
            avg_temperature: Some(32.0),
            dod_pct: Some(80.0),
            c_rate: Some(0.8),
            calendar_age_months: Some(24.0),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn reference_scenario_observed_health() {
        let engine = DegradationEngine::new();
        let analysis = engine.analyze(&reference_profile()).unwrap();

        assert!((analysis.fade.observed_health_pct - 84.0).abs() < 1e-9);
    }

    #[test]
    fn reference_scenario_trend_endpoints() {
        let engine = DegradationEngine::new();
        let analysis = engine.analyze(&reference_profile()).unwrap();

        let first = analysis.trend.first().unwrap();
        assert_eq!(first.cycle, 0);
        assert_eq!(first.health_pct, 100.0);
        assert_eq!(first.capacity, 100.0);

        // Calibration anchors the terminal model health onto the measured
        // 84 % even though the sweep never reads the measurement.
        let last = analysis.trend.last().unwrap();
        assert_eq!(last.cycle, 550);
        assert!((last.health_pct - 84.0).abs() < 0.01);
        assert!((last.capacity - 84.0).abs() < 0.01);
    }

    #[test]
    fn reference_scenario_remaining_life() {
        let engine = DegradationEngine::new();
        let analysis = engine.analyze(&reference_profile()).unwrap();

        // 16 % fade over 24 months -> 0.667 %/month; 14 points of headroom
        // above the 70 % threshold -> 21 months.
        assert_eq!(analysis.fade.estimated_months_to_eol, 21);
    }

    #[test]
    fn reference_scenario_confidence_is_medium() {
        let engine = DegradationEngine::new();
        let analysis = engine.analyze(&reference_profile()).unwrap();

        assert_eq!(analysis.confidence.level, ConfidenceLevel::Medium);
        assert!(analysis.calibration_factor > 0.5 && analysis.calibration_factor < 0.6);
        assert_eq!(
            analysis.confidence.calibration_factor,
            analysis.calibration_factor
        );
    }

    #[test]
    fn analysis_fails_cleanly_on_invalid_profile() {
        let engine = DegradationEngine::new();
        let mut profile = reference_profile();
        profile.nominal_capacity = 0.0;

        assert!(matches!(
            engine.analyze(&profile),
            Err(battery_core::ModelError::InvalidProfile(_))
        ));
    }

    #[test]
    fn trend_endpoints_hold_across_step_relations() {
        let model = FadeModel::new();
        // Exact multiple of the step, one below, one above, and tiny counts.
        for cycles in [0, 3, 25, 500, 501, 549, 550] {
            let profile = ProfileInput {
                nominal_capacity: Some(50.0),
                charge_cycles: Some(cycles),
                calendar_age_years: Some(1.5),
                ..Default::default()
            }
            .resolve()
            .unwrap();

            let trend = build_trend(&model, &profile).unwrap();
            assert_eq!(trend.first().unwrap().cycle, 0);
            assert_eq!(trend.first().unwrap().health_pct, 100.0);
            assert_eq!(trend.last().unwrap().cycle, cycles as u32);
        }
    }

    #[test]
    fn calibration_is_bounded_for_arbitrary_profiles() {
        let model = FadeModel::new();
        for cycles in [50, 137, 550, 4000] {
            for capacity in [1.0, 42.0, 84.0, 100.0, 250.0] {
                for temp in [-30.0, 10.0, 55.0] {
                    let profile = ProfileInput {
                        nominal_capacity: Some(100.0),
                        current_capacity: Some(capacity),
                        charge_cycles: Some(cycles),
                        avg_temperature: Some(temp),
                        calendar_age_years: Some(3.0),
                        ..Default::default()
                    }
                    .resolve()
                    .unwrap();

                    let factor = calibration_factor(&model, &profile).unwrap();
                    assert!(
                        (MIN_CALIBRATION_FACTOR..=MAX_CALIBRATION_FACTOR).contains(&factor),
                        "factor {factor} out of bounds for cycles={cycles} capacity={capacity}"
                    );
                }
            }
        }
    }

    #[test]
    fn single_point_and_engine_agree() {
        let engine = DegradationEngine::new();
        let profile = reference_profile();

        let factor = calibration_factor(engine.model(), &profile).unwrap();
        let direct = engine.model().evaluate(&profile, factor).unwrap();
        let combined = engine.analyze(&profile).unwrap();

        assert_eq!(direct.total_fade_pct, combined.fade.total_fade_pct);
        assert_eq!(direct.estimated_months_to_eol, combined.fade.estimated_months_to_eol);
    }
}
