use serde::{Deserialize, Serialize};

/// Tunable coefficients for the fade model.
///
/// Passed into the model explicitly instead of living as module globals so
/// tests can run alternate coefficient sets deterministically. The defaults
/// are the fixed production set; there is no per-chemistry tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FadeCoefficients {
    /// Base cycle-fade coefficient (k_c)
    pub cycle_fade_base: f64,
    /// Exponent applied to the depth-of-discharge fraction (alpha)
    pub dod_exponent: f64,
    /// Extra fade per unit of C-rate above 1C
    pub c_rate_penalty: f64,
    /// Base calendar-fade coefficient (k_t)
    pub calendar_fade_base: f64,
    /// Arrhenius activation energy, J/mol (Ea)
    pub activation_energy: f64,
    /// Universal gas constant, J/(mol*K)
    pub gas_constant: f64,
    /// Exponent applied to calendar age in years (beta)
    pub calendar_exponent: f64,
    /// State of health below which the battery is considered end-of-life
    pub eol_threshold_pct: f64,
}

impl Default for FadeCoefficients {
    fn default() -> Self {
        Self {
            cycle_fade_base: 0.015,
            dod_exponent: 0.6,
            c_rate_penalty: 0.5,
            calendar_fade_base: 0.01,
            activation_energy: 25_000.0,
            gas_constant: 8.314,
            calendar_exponent: 0.7,
            eol_threshold_pct: 70.0,
        }
    }
}
