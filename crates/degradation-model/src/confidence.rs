use battery_core::{BatteryProfile, ConfidenceAssessment, ConfidenceLevel, ModelError};

use crate::calibration::{calibration_factor, MIN_CYCLES_FOR_CALIBRATION};
use crate::fade::FadeModel;

// Calibration factor bands for grading. A factor near 1.0 means the model
// already agreed with the measurement; the further it had to move, the less
// the projection can be trusted.
const HIGH_CONFIDENCE_BAND: (f64, f64) = (0.8, 1.2);
const MEDIUM_CONFIDENCE_BAND: (f64, f64) = (0.5, 2.0);

const HIGH_ACCURACY: &str = "±2 months";
const MEDIUM_ACCURACY: &str = "±4 months";
const LOW_ACCURACY: &str = "±6 months";

/// Grade prediction reliability from the calibration outcome.
pub fn assess_confidence(
    model: &FadeModel,
    profile: &BatteryProfile,
) -> Result<ConfidenceAssessment, ModelError> {
    profile.ensure_valid()?;

    if profile.current_capacity.is_none() || profile.charge_cycles < MIN_CYCLES_FOR_CALIBRATION {
        return Ok(ConfidenceAssessment {
            level: ConfidenceLevel::Low,
            accuracy: LOW_ACCURACY.to_string(),
            note: "Not enough usage data to calibrate; estimate relies on model defaults."
                .to_string(),
            calibration_factor: 1.0,
        });
    }

    let factor = calibration_factor(model, profile)?;
    let (level, accuracy, note) = if within(factor, HIGH_CONFIDENCE_BAND) {
        (
            ConfidenceLevel::High,
            HIGH_ACCURACY,
            "Model closely matches the measured capacity.",
        )
    } else if within(factor, MEDIUM_CONFIDENCE_BAND) {
        (
            ConfidenceLevel::Medium,
            MEDIUM_ACCURACY,
            "Model needed a moderate adjustment to match the measured capacity.",
        )
    } else {
        (
            ConfidenceLevel::Low,
            LOW_ACCURACY,
            "Model deviates strongly from the measured capacity; treat the projection with caution.",
        )
    };

    Ok(ConfidenceAssessment {
        level,
        accuracy: accuracy.to_string(),
        note: note.to_string(),
        calibration_factor: factor,
    })
}

fn within(value: f64, band: (f64, f64)) -> bool {
    (band.0..=band.1).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_core::ProfileInput;

    fn profile(cycles: i64, current_capacity: Option<f64>) -> BatteryProfile {
        ProfileInput {
            nominal_capacity: Some(100.0),
            charge_cycles: Some(cycles),
            current_capacity,
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn missing_measurement_grades_low() {
        let model = FadeModel::new();
        let assessment = assess_confidence(&model, &profile(500, None)).unwrap();
        assert_eq!(assessment.level, ConfidenceLevel::Low);
        assert_eq!(assessment.accuracy, "±6 months");
        assert_eq!(assessment.calibration_factor, 1.0);
    }

    #[test]
    fn short_history_grades_low() {
        let model = FadeModel::new();
        let assessment = assess_confidence(&model, &profile(10, Some(95.0))).unwrap();
        assert_eq!(assessment.level, ConfidenceLevel::Low);
        assert!(assessment.note.contains("Not enough usage data"));
    }

    #[test]
    fn agreement_grades_high() {
        let model = FadeModel::new();
        let p = profile(550, None);
        // Feed the model's own prediction back as the measurement so the
        // factor lands at exactly 1.0.
        let predicted = model.evaluate(&p, 1.0).unwrap().model_health_pct;
        let assessment =
            assess_confidence(&model, &profile(550, Some(predicted))).unwrap();

        assert_eq!(assessment.level, ConfidenceLevel::High);
        assert_eq!(assessment.accuracy, "±2 months");
        assert!((assessment.calibration_factor - 1.0).abs() < 1e-9);
    }

    #[test]
    fn moderate_deviation_grades_medium() {
        let model = FadeModel::new();
        // 550 cycles predicts ~30.8 % fade; 84 Ah measured is ~16 % actual,
        // factor ~0.52.
        let assessment = assess_confidence(&model, &profile(550, Some(84.0))).unwrap();
        assert_eq!(assessment.level, ConfidenceLevel::Medium);
        assert_eq!(assessment.accuracy, "±4 months");
    }

    #[test]
    fn strong_deviation_grades_low() {
        let model = FadeModel::new();
        // ~31 % predicted vs ~9 % actual: factor ~0.3, below the medium band.
        let assessment = assess_confidence(&model, &profile(550, Some(91.0))).unwrap();
        assert_eq!(assessment.level, ConfidenceLevel::Low);
        assert!(assessment.calibration_factor < 0.5);
    }
}
