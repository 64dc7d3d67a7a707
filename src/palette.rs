//! Palettes built from a color source.
//!
//! A [`PaletteBuilder`] resolves its source into a base color list once, then
//! derives two views of the same palette:
//!
//! - a continuous map, a lookup table fitted through the (optionally shuffled)
//!   base colors with gamma correction;
//! - a discrete map of `color_count` swatches sampled evenly from the
//!   continuous map, optionally shuffled.
//!
//! Nothing changes after construction. Randomness comes from an injected
//! generator ([`PaletteBuilder::with_rng`]) or from `PaletteOptions::seed`.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use std::sync::Arc;

use colorgrad::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::colormaps::{
    builtin_registry, linspace, parse_color, parse_colors, segmented::check_fit_params, Colormap,
    ColormapKind, ListedColormap, SegmentedColormap, DEFAULT_BIN_COUNT,
};
use crate::error::{PaletteError, Result};
use crate::norm::Normalizer;

/// Swatch count taken from a segmented source when none is requested
pub const DEFAULT_SEGMENTED_SAMPLES: usize = 10;

/// Where the base colors of a palette come from
#[derive(Clone)]
pub enum ColorSource {
    /// A colormap in the builtin registry
    Named(String),
    /// An existing colormap object
    Map(Arc<dyn Colormap>),
    /// Anchors of a continuous gradient, sampled like a segmented map
    Anchors(Vec<Color>),
    /// An explicit ordered color list, used as is
    Explicit(Vec<Color>),
}

impl ColorSource {
    pub fn named(name: impl Into<String>) -> Self {
        ColorSource::Named(name.into())
    }

    /// An explicit list from CSS color strings
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        Ok(ColorSource::Explicit(parse_colors(colors)?))
    }

    /// Gradient anchors from CSS color strings
    pub fn anchors_from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        Ok(ColorSource::Anchors(parse_colors(colors)?))
    }
}

impl fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSource::Named(name) => f.debug_tuple("Named").field(name).finish(),
            ColorSource::Map(map) => f
                .debug_tuple("Map")
                .field(&format_args!("{} ({})", map.name(), map.kind()))
                .finish(),
            ColorSource::Anchors(colors) => f.debug_tuple("Anchors").field(colors).finish(),
            ColorSource::Explicit(colors) => f.debug_tuple("Explicit").field(colors).finish(),
        }
    }
}

impl FromStr for ColorSource {
    type Err = PaletteError;

    /// A string with a comma or a leading `#` is an explicit color list,
    /// anything else a colormap name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PaletteError::InvalidSource {
                message: "empty color source".to_string(),
            });
        }
        if s.starts_with('#') || s.contains(',') {
            let colors = split_color_list(s)
                .into_iter()
                .map(parse_color)
                .collect::<Result<Vec<_>>>()?;
            return Ok(ColorSource::Explicit(colors));
        }
        Ok(ColorSource::Named(s.to_string()))
    }
}

/// Split on top-level commas so `rgb(1,2,3)` stays whole.
fn split_color_list(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts.into_iter().filter(|p| !p.trim().is_empty()).collect()
}

/// Construction settings of a palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteOptions {
    /// Name given to both derived maps
    #[serde(default = "default_name")]
    pub name: String,

    /// Lookup table size of the continuous map
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,

    /// Number of discrete swatches (None or 0 = length of the source)
    #[serde(default)]
    pub color_count: Option<usize>,

    /// Gamma applied when fitting the continuous map
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Permute the base colors before fitting the continuous map
    #[serde(default)]
    pub shuffle_continuous: bool,

    /// Permute the discrete swatches
    #[serde(default)]
    pub shuffle_discrete: bool,

    /// Seed for the shuffles (None = thread-local generator)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Normalizer applied to fractional lookups
    #[serde(default)]
    pub normalizer: Normalizer,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            name: default_name(),
            bin_count: default_bin_count(),
            color_count: None,
            gamma: default_gamma(),
            shuffle_continuous: false,
            shuffle_discrete: false,
            seed: None,
            normalizer: Normalizer::default(),
        }
    }
}

impl PaletteOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        check_fit_params(self.bin_count, self.gamma)?;
        self.normalizer.validate()
    }

    fn requested_colors(&self) -> Option<usize> {
        self.color_count.filter(|&n| n > 0)
    }
}

fn default_name() -> String {
    "mycolormap".to_string()
}

fn default_bin_count() -> usize {
    DEFAULT_BIN_COUNT
}

fn default_gamma() -> f64 {
    1.0
}

/// Key for [`PaletteBuilder::at`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// A data value, normalized then looked up in the continuous map
    Fraction(f64),
    /// A swatch index into the discrete map
    Index(usize),
}

impl From<f64> for Lookup {
    fn from(value: f64) -> Self {
        Lookup::Fraction(value)
    }
}

impl From<f32> for Lookup {
    fn from(value: f32) -> Self {
        Lookup::Fraction(value as f64)
    }
}

impl From<usize> for Lookup {
    fn from(index: usize) -> Self {
        Lookup::Index(index)
    }
}

/// A continuous and a discrete palette derived from one color source
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    options: PaletteOptions,
    color_count: usize,
    base_colors: Vec<Color>,
    continuous: SegmentedColormap,
    discrete: ListedColormap,
}

impl PaletteBuilder {
    /// Build a palette, drawing shuffles from `options.seed` when set and from
    /// the thread-local generator otherwise.
    pub fn new(source: ColorSource, options: &PaletteOptions) -> Result<Self> {
        match options.seed {
            Some(seed) => Self::with_rng(source, options, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(source, options, &mut rand::thread_rng()),
        }
    }

    /// Build a palette, drawing shuffles from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        source: ColorSource,
        options: &PaletteOptions,
        rng: &mut R,
    ) -> Result<Self> {
        options.validate()?;

        let requested = options.requested_colors();
        let base_colors = resolve_source(&source, requested)?;
        let color_count = requested.unwrap_or(base_colors.len());

        let continuous = if options.shuffle_continuous {
            let mut shuffled = base_colors.clone();
            shuffled.shuffle(rng);
            trace!(name = %options.name, "Shuffled base colors for the continuous map");
            SegmentedColormap::from_list(&options.name, &shuffled, options.bin_count, options.gamma)?
        } else {
            SegmentedColormap::from_list(
                &options.name,
                &base_colors,
                options.bin_count,
                options.gamma,
            )?
        };

        let mut swatches = continuous.sample(color_count);
        if options.shuffle_discrete {
            swatches.shuffle(rng);
            trace!(name = %options.name, "Shuffled discrete swatches");
        }
        let discrete = ListedColormap::new(options.name.clone(), swatches)?;

        debug!(
            name = %options.name,
            source = ?source_label(&source),
            base_colors = base_colors.len(),
            color_count = color_count,
            bin_count = options.bin_count,
            gamma = options.gamma,
            "Built palette"
        );

        Ok(Self {
            options: options.clone(),
            color_count,
            base_colors,
            continuous,
            discrete,
        })
    }

    /// Color of a data value through the normalizer and the continuous map
    pub fn get_by_fraction(&self, value: f64) -> Color {
        self.continuous
            .map_normalized(self.options.normalizer.normalize(value))
    }

    /// Swatch `index` of the discrete map
    pub fn get_by_index(&self, index: usize) -> Result<Color> {
        self.discrete.get(index)
    }

    /// Indexing: fractions go to the continuous map, indices to the discrete one
    pub fn at(&self, key: impl Into<Lookup>) -> Result<Color> {
        match key.into() {
            Lookup::Fraction(value) => Ok(self.get_by_fraction(value)),
            Lookup::Index(index) => self.get_by_index(index),
        }
    }

    /// The discrete swatches, in order
    pub fn get_color_list(&self) -> &[Color] {
        self.discrete.colors()
    }

    /// The discrete swatches as hex strings
    pub fn hex_colors(&self) -> Vec<String> {
        self.discrete
            .colors()
            .iter()
            .map(|c| c.to_hex_string())
            .collect()
    }

    /// Iterate over the discrete swatches
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.discrete.colors().iter()
    }

    /// A new palette from this palette's swatches followed by `other`'s,
    /// with default options.
    pub fn concat(&self, other: &PaletteBuilder) -> Result<PaletteBuilder> {
        let colors: Vec<Color> = self.iter().chain(other.iter()).cloned().collect();
        PaletteBuilder::new(ColorSource::Explicit(colors), &PaletteOptions::default())
    }

    pub fn continuous(&self) -> &SegmentedColormap {
        &self.continuous
    }

    pub fn discrete(&self) -> &ListedColormap {
        &self.discrete
    }

    /// The resolved source colors, before any shuffle
    pub fn base_colors(&self) -> &[Color] {
        &self.base_colors
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn bin_count(&self) -> usize {
        self.options.bin_count
    }

    pub fn gamma(&self) -> f64 {
        self.continuous.gamma()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.options.normalizer
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }
}

impl<'a> IntoIterator for &'a PaletteBuilder {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add for &PaletteBuilder {
    type Output = Result<PaletteBuilder>;

    fn add(self, other: &PaletteBuilder) -> Self::Output {
        self.concat(other)
    }
}

/// Base colors of a colormap.
///
/// Listed maps give their colors as is; segmented maps are sampled at
/// `requested` points (default [`DEFAULT_SEGMENTED_SAMPLES`]). Other
/// representations are not supported.
pub fn resolve_colormap(map: &dyn Colormap, requested: Option<usize>) -> Result<Vec<Color>> {
    match map.kind() {
        ColormapKind::Listed => map
            .listed_colors()
            .map(<[Color]>::to_vec)
            .ok_or_else(|| PaletteError::Unsupported {
                message: format!("listed colormap '{}' does not expose its colors", map.name()),
            }),
        ColormapKind::Segmented => Ok(linspace(requested.unwrap_or(DEFAULT_SEGMENTED_SAMPLES))
            .into_iter()
            .map(|t| map.map_normalized(t))
            .collect()),
        kind => Err(PaletteError::Unsupported {
            message: format!("unknown color map class '{}' for colormap '{}'", kind, map.name()),
        }),
    }
}

fn resolve_source(source: &ColorSource, requested: Option<usize>) -> Result<Vec<Color>> {
    let colors = match source {
        ColorSource::Named(name) => {
            let registry = builtin_registry()?;
            if !registry.contains(name) {
                return Err(PaletteError::InvalidSource {
                    message: format!("'{}' is neither a known colormap nor a color list", name),
                });
            }
            resolve_colormap(registry.get(name)?.as_ref(), requested)?
        }
        ColorSource::Map(map) => resolve_colormap(map.as_ref(), requested)?,
        ColorSource::Anchors(anchors) => {
            SegmentedColormap::from_list("anchors", anchors, DEFAULT_BIN_COUNT, 1.0)?
                .sample(requested.unwrap_or(DEFAULT_SEGMENTED_SAMPLES))
        }
        ColorSource::Explicit(colors) => colors.clone(),
    };

    if colors.is_empty() {
        return Err(PaletteError::InvalidSource {
            message: "color source resolved to an empty color list".to_string(),
        });
    }
    Ok(colors)
}

fn source_label(source: &ColorSource) -> String {
    match source {
        ColorSource::Named(name) => name.clone(),
        ColorSource::Map(map) => map.name().to_string(),
        ColorSource::Anchors(colors) => format!("{} anchors", colors.len()),
        ColorSource::Explicit(colors) => format!("{} explicit colors", colors.len()),
    }
}
