//! Listed colormaps (explicitly enumerated colors).
//!
//! A listed map returns one of a fixed set of colors. The qualitative tables
//! below are the usual plotting defaults; the perceptually uniform maps are
//! enumerated at 256 entries from `colorgrad`'s presets.

use colorgrad::{Color, Gradient};

use super::colormap::{bad_color, linspace, lut_index, parse_colors, Colormap, ColormapKind};
use crate::error::{PaletteError, Result};

/// Number of entries used when enumerating a continuous preset
pub const ENUMERATED_SIZE: usize = 256;

/// A colormap backed by an explicit color list
#[derive(Debug, Clone)]
pub struct ListedColormap {
    name: String,
    colors: Vec<Color>,
}

impl ListedColormap {
    /// Create a listed map. The list must not be empty.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Result<Self> {
        let name = name.into();
        if colors.is_empty() {
            return Err(PaletteError::InvalidSource {
                message: format!("listed colormap '{}' needs at least one color", name),
            });
        }
        Ok(Self { name, colors })
    }

    /// Create a listed map from CSS color strings
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Result<Self> {
        Self::new(name, parse_colors(hex)?)
    }

    /// Enumerate `n` evenly spaced colors of a gradient
    pub fn from_gradient(name: impl Into<String>, gradient: &Gradient, n: usize) -> Result<Self> {
        let colors = linspace(n).into_iter().map(|t| gradient.at(t)).collect();
        Self::new(name, colors)
    }

    /// All colors, in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a listed map holds at least one color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`
    pub fn get(&self, index: usize) -> Result<Color> {
        self.colors
            .get(index)
            .cloned()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }
}

impl Colormap for ListedColormap {
    fn map_normalized(&self, value: f64) -> Color {
        if value.is_nan() {
            return bad_color();
        }
        self.colors[lut_index(value, self.colors.len())].clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ColormapKind {
        ColormapKind::Listed
    }

    fn lut_size(&self) -> usize {
        self.colors.len()
    }

    fn listed_colors(&self) -> Option<&[Color]> {
        Some(&self.colors)
    }
}

// Qualitative tables
const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

const DARK2: [&str; 8] = [
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];

const PASTEL1: [&str; 9] = [
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
];

const ACCENT: [&str; 8] = [
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];

const PAIRED: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

/// The builtin listed maps
pub(crate) fn builtin() -> Result<Vec<ListedColormap>> {
    let tables: [(&str, &[&str]); 7] = [
        ("tab10", &TAB10),
        ("Set1", &SET1),
        ("Set2", &SET2),
        ("Dark2", &DARK2),
        ("Pastel1", &PASTEL1),
        ("Accent", &ACCENT),
        ("Paired", &PAIRED),
    ];

    let mut maps = tables
        .iter()
        .map(|(name, hex)| ListedColormap::from_hex(*name, hex))
        .collect::<Result<Vec<_>>>()?;

    let uniform: [(&str, Gradient); 5] = [
        ("viridis", colorgrad::viridis()),
        ("magma", colorgrad::magma()),
        ("plasma", colorgrad::plasma()),
        ("inferno", colorgrad::inferno()),
        ("cividis", colorgrad::cividis()),
    ];
    for (name, gradient) in uniform.iter() {
        maps.push(ListedColormap::from_gradient(*name, gradient, ENUMERATED_SIZE)?);
    }

    Ok(maps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            ListedColormap::new("empty", Vec::new()),
            Err(PaletteError::InvalidSource { .. })
        ));
    }

    #[test]
    fn test_fraction_lookup() {
        let map = ListedColormap::from_hex("rgb", &["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        assert_eq!(map.map_rgba8(0.0), [255, 0, 0, 255]);
        assert_eq!(map.map_rgba8(0.4), [0, 255, 0, 255]);
        assert_eq!(map.map_rgba8(1.0), [0, 0, 255, 255]);
        assert_eq!(map.map_rgba8(-1.0), [255, 0, 0, 255]);
        assert_eq!(map.map_rgba8(f64::NAN), [0, 0, 0, 0]);
    }

    #[test]
    fn test_index_lookup() {
        let map = ListedColormap::from_hex("pair", &["#000000", "#ffffff"]).unwrap();
        assert_eq!(map.get(1).unwrap().to_rgba8(), [255, 255, 255, 255]);
        assert!(matches!(
            map.get(2),
            Err(PaletteError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_builtin_lengths() {
        let maps = builtin().unwrap();
        let len_of = |name: &str| {
            maps.iter()
                .find(|m| m.name() == name)
                .map(|m| m.len())
                .unwrap()
        };
        assert_eq!(len_of("tab10"), 10);
        assert_eq!(len_of("Set1"), 9);
        assert_eq!(len_of("Paired"), 12);
        assert_eq!(len_of("viridis"), ENUMERATED_SIZE);
    }
}
