//! Segmented colormaps (lookup tables fitted through anchor colors).
//!
//! The fit interpolates linearly in RGBA between evenly spaced anchors and
//! stores `bin_count` samples. Gamma reshapes the sample grid, so values
//! below 1 stretch the upper anchors and values above 1 stretch the lower.

use colorgrad::{BlendMode, Color, CustomGradient, Interpolation};

use super::colormap::{bad_color, linspace, lut_index, Colormap, ColormapKind};
use crate::error::{PaletteError, Result};

/// Table size used for builtin maps and anchor sources
pub const DEFAULT_BIN_COUNT: usize = 256;

/// A lookup table fitted through a list of anchor colors
#[derive(Debug, Clone)]
pub struct SegmentedColormap {
    name: String,
    anchors: Vec<Color>,
    gamma: f64,
    lut: Vec<Color>,
}

/// Check the parameters of a gradient fit
pub fn check_fit_params(bin_count: usize, gamma: f64) -> Result<()> {
    if bin_count == 0 {
        return Err(PaletteError::InvalidParameter {
            param: "bin_count".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(PaletteError::InvalidParameter {
            param: "gamma".to_string(),
            message: format!("must be a positive finite number, got {}", gamma),
        });
    }
    Ok(())
}

impl SegmentedColormap {
    /// Fit a map through `anchors` with `bin_count` table entries
    pub fn from_list(
        name: impl Into<String>,
        anchors: &[Color],
        bin_count: usize,
        gamma: f64,
    ) -> Result<Self> {
        let name = name.into();
        check_fit_params(bin_count, gamma)?;

        let anchors = match anchors {
            [] => {
                return Err(PaletteError::InvalidSource {
                    message: format!("segmented colormap '{}' needs at least one color", name),
                })
            }
            [single] => vec![single.clone(), single.clone()],
            many => many.to_vec(),
        };

        let gradient = CustomGradient::new()
            .colors(&anchors)
            .mode(BlendMode::Rgb)
            .interpolation(Interpolation::Linear)
            .build()
            .map_err(|e| PaletteError::InvalidSource {
                message: format!("cannot fit colormap '{}': {}", name, e),
            })?;

        // A one-entry table holds the end color.
        let lut = if bin_count == 1 {
            vec![gradient.at(1.0)]
        } else {
            linspace(bin_count)
                .into_iter()
                .map(|x| gradient.at(x.powf(gamma)))
                .collect()
        };

        Ok(Self {
            name,
            anchors,
            gamma,
            lut,
        })
    }

    /// Fit a map through 8-bit RGB anchors with the default table size
    pub fn from_rgb8(name: impl Into<String>, anchors: &[[u8; 3]]) -> Result<Self> {
        let colors: Vec<Color> = anchors
            .iter()
            .map(|[r, g, b]| Color::from_rgba8(*r, *g, *b, 255))
            .collect();
        Self::from_list(name, &colors, DEFAULT_BIN_COUNT, 1.0)
    }

    /// The anchors the table was fitted through
    pub fn anchors(&self) -> &[Color] {
        &self.anchors
    }

    /// The gamma used for the fit
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The fitted lookup table
    pub fn lut(&self) -> &[Color] {
        &self.lut
    }

    /// Sample the map at `n` evenly spaced points in [0, 1]
    pub fn sample(&self, n: usize) -> Vec<Color> {
        linspace(n)
            .into_iter()
            .map(|t| self.map_normalized(t))
            .collect()
    }
}

impl Colormap for SegmentedColormap {
    fn map_normalized(&self, value: f64) -> Color {
        if value.is_nan() {
            return bad_color();
        }
        self.lut[lut_index(value, self.lut.len())].clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ColormapKind {
        ColormapKind::Segmented
    }

    fn lut_size(&self) -> usize {
        self.lut.len()
    }
}

// Anchor sets for the builtin segmented maps
const GRAY: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];
const BWR: [[u8; 3]; 3] = [[0, 0, 255], [255, 255, 255], [255, 0, 0]];
const SEISMIC: [[u8; 3]; 5] = [[0, 0, 77], [0, 0, 255], [255, 255, 255], [255, 0, 0], [128, 0, 0]];
const HOT: [[u8; 3]; 4] = [[11, 0, 0], [255, 0, 0], [255, 255, 0], [255, 255, 255]];
const COOL: [[u8; 3]; 2] = [[0, 255, 255], [255, 0, 255]];
const SPRING: [[u8; 3]; 2] = [[255, 0, 255], [255, 255, 0]];
const SUMMER: [[u8; 3]; 2] = [[0, 128, 102], [255, 255, 102]];
const AUTUMN: [[u8; 3]; 2] = [[255, 0, 0], [255, 255, 0]];
const WINTER: [[u8; 3]; 2] = [[0, 0, 255], [0, 255, 128]];

// Blue to white to red, good for temperature anomalies
const COOLWARM: [[u8; 3]; 9] = [
    [59, 76, 192], // Dark blue
    [98, 130, 234],
    [141, 176, 254],
    [184, 208, 249],
    [221, 221, 221], // Light gray in the middle
    [241, 204, 185],
    [247, 166, 135],
    [229, 112, 88],
    [192, 40, 47], // Dark red
];

const RDBU: [[u8; 3]; 11] = [
    [103, 0, 31],
    [178, 24, 43],
    [214, 96, 77],
    [244, 165, 130],
    [253, 219, 199],
    [247, 247, 247],
    [209, 229, 240],
    [146, 197, 222],
    [67, 147, 195],
    [33, 102, 172],
    [5, 48, 97],
];

/// The builtin segmented maps
pub(crate) fn builtin() -> Result<Vec<SegmentedColormap>> {
    let tables: [(&str, &[[u8; 3]]); 11] = [
        ("gray", &GRAY),
        ("bwr", &BWR),
        ("seismic", &SEISMIC),
        ("hot", &HOT),
        ("cool", &COOL),
        ("spring", &SPRING),
        ("summer", &SUMMER),
        ("autumn", &AUTUMN),
        ("winter", &WINTER),
        ("coolwarm", &COOLWARM),
        ("RdBu", &RDBU),
    ];
    tables
        .iter()
        .map(|(name, anchors)| SegmentedColormap::from_rgb8(*name, anchors))
        .collect()
}
