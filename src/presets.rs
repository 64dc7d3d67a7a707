//! Preset colors and text styles for figures.
//!
//! The size tiers follow how many figures share a row: small for two, normal
//! for three, large for four. Styles serialize to the keyword dictionaries a
//! plotting backend takes for axis labels and tick labels.

use std::str::FromStr;

use colorgrad::Color;
use serde::Serialize;

use crate::colormaps::parse_colors;
use crate::error::{PaletteError, Result};

/// Colors for points and lines: red-like, blue-like, green-like
pub const CURVE_COLORS: [&str; 3] = ["#cf625b", "#51a8cf", "#50bf57"];

/// Colors for filled areas: light blue, light red
pub const FILLIN_COLORS: [&str; 2] = ["#64c9f5", "#f57e76"];

/// Curve colors, parsed
pub fn curve_colors() -> Result<Vec<Color>> {
    parse_colors(&CURVE_COLORS)
}

/// Fill-in colors, parsed
pub fn fillin_colors() -> Result<Vec<Color>> {
    parse_colors(&FILLIN_COLORS)
}

/// Figure layout tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    /// Two figures per row
    Small,
    /// Three figures per row
    Normal,
    /// Four figures per row
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Normal, SizeTier::Large];
}

impl FromStr for SizeTier {
    type Err = PaletteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(SizeTier::Small),
            "normal" => Ok(SizeTier::Normal),
            "large" => Ok(SizeTier::Large),
            _ => Err(PaletteError::InvalidParameter {
                param: "size_tier".to_string(),
                message: format!("Unknown size tier: {}. Must be one of: small, normal, large", s),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Axis label style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelStyle {
    pub fontsize: u32,
    pub fontstyle: FontStyle,
    pub fontweight: FontWeight,
}

/// Tick label style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickStyle {
    pub fontsize: u32,
    pub fontweight: FontWeight,
}

/// Axis label style for a tier
pub fn label_style(tier: SizeTier) -> LabelStyle {
    let fontsize = match tier {
        SizeTier::Small => 14,
        SizeTier::Normal => 20,
        SizeTier::Large => 30,
    };
    LabelStyle {
        fontsize,
        fontstyle: FontStyle::Italic,
        fontweight: FontWeight::Bold,
    }
}

/// Tick label style for a tier
pub fn tick_style(tier: SizeTier) -> TickStyle {
    let fontsize = match tier {
        SizeTier::Small => 12,
        SizeTier::Normal => 18,
        SizeTier::Large => 28,
    };
    TickStyle {
        fontsize,
        fontweight: FontWeight::Bold,
    }
}

/// Styles of one tier
#[derive(Debug, Clone, Serialize)]
pub struct TierStyles {
    pub tier: SizeTier,
    pub label: LabelStyle,
    pub tick: TickStyle,
}

/// Every preset in one serializable value
#[derive(Debug, Clone, Serialize)]
pub struct PresetParams {
    pub curve_colors: Vec<&'static str>,
    pub fillin_colors: Vec<&'static str>,
    pub styles: Vec<TierStyles>,
}

impl PresetParams {
    pub fn all() -> Self {
        Self {
            curve_colors: CURVE_COLORS.to_vec(),
            fillin_colors: FILLIN_COLORS.to_vec(),
            styles: SizeTier::ALL
                .iter()
                .map(|&tier| TierStyles {
                    tier,
                    label: label_style(tier),
                    tick: tick_style(tier),
                })
                .collect(),
        }
    }
}
