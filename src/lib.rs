//! # plot-palette
//!
//! Continuous and discrete color palettes for scientific plotting.
//!
//! A [`PaletteBuilder`] takes a color source (a registry colormap, a colormap
//! object, gradient anchors or an explicit color list) and derives two views
//! of it: a continuous map for data values and a discrete list of swatches
//! for categorical series. Gamma correction and random shuffling of either
//! view are optional.
//!
//! ## Key Features
//!
//! - **Colormap registry**: qualitative tables, perceptually uniform maps,
//!   anchor-fitted diverging and sequential maps
//! - **Deterministic shuffles**: inject a random generator or set a seed
//! - **Figure presets**: curated curve/fill-in colors and label/tick styles
//! - **Diagnostic rendering**: a two-strip PNG of both views
//!
//! ## Example
//!
//! ```no_run
//! use plot_palette::{ColorSource, PaletteBuilder, PaletteOptions};
//!
//! let source = ColorSource::from_hex(&["#ff0000", "#00ff00", "#0000ff"])?;
//! let palette = PaletteBuilder::new(source, &PaletteOptions::default())?;
//! assert_eq!(palette.color_count(), 3);
//! let mid = palette.get_by_fraction(0.5);
//! let first = palette.get_by_index(0)?;
//! # let _ = (mid, first);
//! # Ok::<(), plot_palette::PaletteError>(())
//! ```

pub mod colormaps;
pub mod config;
pub mod error;
pub mod logging;
pub mod norm;
pub mod palette;
pub mod presets;
pub mod render;

pub use colorgrad::Color;
pub use colormaps::{get_colormap, Colormap, ColormapKind, ColormapRegistry};
pub use config::Config;
pub use error::{PaletteError, Result};
pub use logging::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation,
};
pub use norm::Normalizer;
pub use palette::{ColorSource, Lookup, PaletteBuilder, PaletteOptions};
pub use presets::{label_style, tick_style, PresetParams, SizeTier};
