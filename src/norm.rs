//! Value normalizers.
//!
//! A normalizer maps a data value into [0, 1] before it is looked up in a
//! continuous colormap.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Mapping from data values to the unit interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Normalizer {
    /// Linear min-max scaling
    Linear { vmin: f64, vmax: f64 },
    /// Scaling of `ln(value)`; values <= 0 are masked (NaN)
    Log { vmin: f64, vmax: f64 },
    /// Linear scaling followed by `x^gamma`
    Power { vmin: f64, vmax: f64, gamma: f64 },
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::Linear {
            vmin: 0.0,
            vmax: 1.0,
        }
    }
}

impl Normalizer {
    /// Normalize `value` into [0, 1]. NaN and masked values return NaN.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let scaled = match *self {
            Normalizer::Linear { vmin, vmax } => scale(value, vmin, vmax),
            Normalizer::Log { vmin, vmax } => {
                if value <= 0.0 {
                    return f64::NAN;
                }
                scale(value.ln(), vmin.ln(), vmax.ln())
            }
            Normalizer::Power { vmin, vmax, gamma } => {
                scale(value, vmin, vmax).clamp(0.0, 1.0).powf(gamma)
            }
        };
        scaled.clamp(0.0, 1.0)
    }

    /// Check that the range and exponent are usable
    pub fn validate(&self) -> Result<()> {
        let (vmin, vmax) = match *self {
            Normalizer::Linear { vmin, vmax } => (vmin, vmax),
            Normalizer::Log { vmin, vmax } => {
                if vmin <= 0.0 {
                    return Err(invalid(format!(
                        "log normalization needs vmin > 0, got {}",
                        vmin
                    )));
                }
                (vmin, vmax)
            }
            Normalizer::Power { vmin, vmax, gamma } => {
                if !gamma.is_finite() || gamma <= 0.0 {
                    return Err(invalid(format!(
                        "power normalization needs a positive gamma, got {}",
                        gamma
                    )));
                }
                (vmin, vmax)
            }
        };
        if !vmin.is_finite() || !vmax.is_finite() || vmin > vmax {
            return Err(invalid(format!(
                "vmin ({}) must be <= vmax ({}) and both finite",
                vmin, vmax
            )));
        }
        Ok(())
    }
}

fn scale(value: f64, vmin: f64, vmax: f64) -> f64 {
    if vmax == vmin {
        0.0
    } else {
        (value - vmin) / (vmax - vmin)
    }
}

fn invalid(message: String) -> PaletteError {
    PaletteError::InvalidParameter {
        param: "normalizer".to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_clamp() {
        let norm = Normalizer::default();
        assert_eq!(norm.normalize(0.25), 0.25);
        assert_eq!(norm.normalize(-1.0), 0.0);
        assert_eq!(norm.normalize(3.0), 1.0);
        assert!(norm.normalize(f64::NAN).is_nan());
    }

    #[test]
    fn test_linear_range() {
        let norm = Normalizer::Linear {
            vmin: 10.0,
            vmax: 20.0,
        };
        assert_eq!(norm.normalize(15.0), 0.5);

        let flat = Normalizer::Linear {
            vmin: 5.0,
            vmax: 5.0,
        };
        assert_eq!(flat.normalize(5.0), 0.0);
    }

    #[test]
    fn test_log() {
        let norm = Normalizer::Log {
            vmin: 1.0,
            vmax: 100.0,
        };
        assert!((norm.normalize(10.0) - 0.5).abs() < 1e-12);
        assert!(norm.normalize(0.0).is_nan());
        assert!(norm.validate().is_ok());
        assert!(Normalizer::Log { vmin: 0.0, vmax: 1.0 }.validate().is_err());
    }

    #[test]
    fn test_power() {
        let norm = Normalizer::Power {
            vmin: 0.0,
            vmax: 1.0,
            gamma: 2.0,
        };
        assert!((norm.normalize(0.5) - 0.25).abs() < 1e-12);
        assert!(Normalizer::Power { vmin: 0.0, vmax: 1.0, gamma: -1.0 }
            .validate()
            .is_err());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let norm = Normalizer::Linear {
            vmin: 1.0,
            vmax: 0.0,
        };
        assert!(norm.validate().is_err());
    }

    #[test]
    fn test_deserialize() {
        let norm: Normalizer =
            serde_json::from_str(r#"{"kind": "log", "vmin": 1.0, "vmax": 1000.0}"#).unwrap();
        assert_eq!(
            norm,
            Normalizer::Log {
                vmin: 1.0,
                vmax: 1000.0
            }
        );
    }
}
