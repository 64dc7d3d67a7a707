//! Colormap trait and utilities.
//!
//! This module defines the common interface for all colormaps along with the
//! small color helpers shared by the listed, segmented and procedural maps.

use std::fmt;
use std::sync::Arc;

use colorgrad::Color;
use ndarray::Array1;
use serde::Serialize;

use crate::error::{PaletteError, Result};

/// How a colormap stores its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColormapKind {
    /// An explicitly enumerated set of colors
    Listed,
    /// A lookup table fitted through a small set of anchor colors
    Segmented,
    /// A formula evaluated on demand
    Procedural,
}

impl fmt::Display for ColormapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColormapKind::Listed => "listed",
            ColormapKind::Segmented => "segmented",
            ColormapKind::Procedural => "procedural",
        };
        f.write_str(name)
    }
}

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color.
    ///
    /// Values outside the unit interval clamp to the end colors; NaN maps to
    /// the transparent "bad" color.
    fn map_normalized(&self, value: f64) -> Color;

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> Color {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Map a normalized value to 8-bit RGBA, ready for an image buffer
    fn map_rgba8(&self, value: f64) -> [u8; 4] {
        self.map_normalized(value).to_rgba8()
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;

    /// Get the representation of this colormap
    fn kind(&self) -> ColormapKind;

    /// Number of table entries, or the rendering resolution of a formula map
    fn lut_size(&self) -> usize;

    /// The enumerated colors, for listed maps only
    fn listed_colors(&self) -> Option<&[Color]> {
        None
    }
}

/// Get a colormap from the builtin registry by name
pub fn get_colormap(name: &str) -> Result<Arc<dyn Colormap>> {
    super::registry::builtin_registry()?.get(name)
}

/// The color returned for NaN lookups.
pub fn bad_color() -> Color {
    Color::new(0.0, 0.0, 0.0, 0.0)
}

/// Parse any CSS color string (`#rrggbb`, `rgb(...)`, named colors, ...).
pub fn parse_color(text: &str) -> Result<Color> {
    Color::from_html(text.trim()).map_err(|e| PaletteError::InvalidSource {
        message: format!("cannot interpret '{}' as a color: {}", text.trim(), e),
    })
}

/// Parse a list of CSS color strings.
pub fn parse_colors<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Color>> {
    texts.iter().map(|t| parse_color(t.as_ref())).collect()
}

/// `n` evenly spaced points in [0, 1], both ends included.
pub fn linspace(n: usize) -> Vec<f64> {
    Array1::linspace(0.0, 1.0, n).to_vec()
}

/// Index into a table of `len` entries for a normalized value.
pub(crate) fn lut_index(value: f64, len: usize) -> usize {
    let scaled = (value * len as f64).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(len.saturating_sub(1))
    }
}

/// Component-wise closeness of two colors.
pub fn colors_close(a: &Color, b: &Color, epsilon: f64) -> bool {
    (a.r - b.r).abs() <= epsilon
        && (a.g - b.g).abs() <= epsilon
        && (a.b - b.b).abs() <= epsilon
        && (a.a - b.a).abs() <= epsilon
}
