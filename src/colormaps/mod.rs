//! Colormap implementations.
//!
//! This module provides the colormaps palettes are built from: enumerated
//! (listed) maps, anchor-fitted (segmented) maps, formula (procedural) maps,
//! and a registry to look them up by name.

pub mod colormap;
pub mod listed;
pub mod procedural;
pub mod registry;
pub mod segmented;

pub use colormap::{
    bad_color, colors_close, get_colormap, linspace, parse_color, parse_colors, Colormap,
    ColormapKind,
};
pub use listed::ListedColormap;
pub use procedural::ProceduralColormap;
pub use registry::{builtin_registry, ColormapRegistry};
pub use segmented::{SegmentedColormap, DEFAULT_BIN_COUNT};
