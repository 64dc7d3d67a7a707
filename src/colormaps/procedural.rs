//! Procedural colormaps.
//!
//! These maps are defined by a formula rather than a color table, so they have
//! neither an enumerated list nor anchors to refit.

use colorgrad::{Color, Gradient};

use super::colormap::{bad_color, Colormap, ColormapKind};
use super::segmented::DEFAULT_BIN_COUNT;

/// A colormap evaluated through a `colorgrad` formula gradient
pub struct ProceduralColormap {
    name: String,
    gradient: Gradient,
}

impl ProceduralColormap {
    pub fn new(name: impl Into<String>, gradient: Gradient) -> Self {
        Self {
            name: name.into(),
            gradient,
        }
    }
}

impl Colormap for ProceduralColormap {
    fn map_normalized(&self, value: f64) -> Color {
        if value.is_nan() {
            return bad_color();
        }
        self.gradient.at(value.clamp(0.0, 1.0))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ColormapKind {
        ColormapKind::Procedural
    }

    fn lut_size(&self) -> usize {
        DEFAULT_BIN_COUNT
    }
}

/// The builtin procedural maps
pub(crate) fn builtin() -> Vec<ProceduralColormap> {
    vec![
        ProceduralColormap::new("turbo", colorgrad::turbo()),
        ProceduralColormap::new("sinebow", colorgrad::sinebow()),
        ProceduralColormap::new("rainbow", colorgrad::rainbow()),
        ProceduralColormap::new("cubehelix", colorgrad::cubehelix_default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_maps() {
        let maps = builtin();
        assert_eq!(maps.len(), 4);
        for map in &maps {
            assert_eq!(map.kind(), ColormapKind::Procedural);
            assert!(map.listed_colors().is_none());
            assert_eq!(map.map_rgba8(f64::NAN), [0, 0, 0, 0]);
            assert_eq!(map.map_rgba8(-2.0), map.map_rgba8(0.0));
            assert_eq!(map.map_rgba8(0.3)[3], 255);
        }
    }

    #[test]
    fn test_lookup_matches_fresh_gradient() {
        let turbo = ProceduralColormap::new("turbo", colorgrad::turbo());
        let fresh = colorgrad::turbo();
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(turbo.map_rgba8(t), fresh.at(t).to_rgba8());
        }
        // Repeated lookups read the same stored gradient
        assert_eq!(turbo.map_rgba8(0.4), turbo.map_rgba8(0.4));
    }
}
