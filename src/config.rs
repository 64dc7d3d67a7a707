//! Configuration management for plot-palette.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};
use crate::palette::PaletteOptions;
use crate::render::{DEFAULT_ROW_HEIGHT, DEFAULT_WIDTH};

/// Command-line arguments for plot-palette
#[derive(Parser, Debug)]
#[command(name = "plot-palette")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Colormap name, or a comma-separated list of colors
    pub source: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "PLOT_PALETTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of discrete colors (default: length of the source)
    #[arg(short = 'n', long, env = "PLOT_PALETTE_COLOR_COUNT")]
    pub color_count: Option<usize>,

    /// Lookup table size of the continuous map
    #[arg(short, long, env = "PLOT_PALETTE_BIN_COUNT")]
    pub bin_count: Option<usize>,

    /// Gamma correction of the continuous map
    #[arg(short, long, env = "PLOT_PALETTE_GAMMA")]
    pub gamma: Option<f64>,

    /// Shuffle the base colors before fitting the continuous map
    #[arg(long)]
    pub shuffle_continuous: bool,

    /// Shuffle the discrete colors
    #[arg(long)]
    pub shuffle_discrete: bool,

    /// Seed for shuffling
    #[arg(long, env = "PLOT_PALETTE_SEED")]
    pub seed: Option<u64>,

    /// Output format for the color list (hex, json, rgba)
    #[arg(short, long, env = "PLOT_PALETTE_FORMAT")]
    pub format: Option<String>,

    /// Write a diagnostic PNG of both maps to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Diagnostic image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height of each strip of the diagnostic image
    #[arg(long)]
    pub row_height: Option<u32>,

    /// List the builtin colormaps and exit
    #[arg(long)]
    pub list: bool,

    /// Print the preset colors and text styles as JSON and exit
    #[arg(long)]
    pub presets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLOT_PALETTE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// What the binary should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Build a palette and print it
    Build,
    /// List registry colormaps
    ListColormaps,
    /// Print presets
    ShowPresets,
}

/// Diagnostic image configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height of each strip in pixels
    #[serde(default = "default_row_height")]
    pub row_height: u32,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Color list format
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional diagnostic PNG path
    #[serde(default)]
    pub image: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color source (colormap name or color list)
    #[serde(default)]
    pub source: Option<String>,

    /// Palette construction options
    #[serde(default)]
    pub palette: PaletteOptions,

    /// Diagnostic image configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Command)> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, Command)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if args.source.is_some() {
            config.source = args.source;
        }
        if args.color_count.is_some() {
            config.palette.color_count = args.color_count;
        }
        if let Some(bin_count) = args.bin_count {
            config.palette.bin_count = bin_count;
        }
        if let Some(gamma) = args.gamma {
            config.palette.gamma = gamma;
        }
        config.palette.shuffle_continuous |= args.shuffle_continuous;
        config.palette.shuffle_discrete |= args.shuffle_discrete;
        if args.seed.is_some() {
            config.palette.seed = args.seed;
        }
        if let Some(format) = args.format {
            config.output.format = format;
        }
        if args.output.is_some() {
            config.output.image = args.output;
        }
        if let Some(width) = args.width {
            config.render.width = width;
        }
        if let Some(row_height) = args.row_height {
            config.render.row_height = row_height;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        let command = if args.list {
            Command::ListColormaps
        } else if args.presets {
            Command::ShowPresets
        } else {
            Command::Build
        };

        Ok((config, command))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.source.is_some() {
            self.source = other.source;
        }
        self.palette = other.palette;
        self.render = other.render;
        self.output.format = other.output.format;
        if other.output.image.is_some() {
            self.output.image = other.output.image;
        }
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PaletteError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate output format
        match self.output.format.as_str() {
            "hex" | "json" | "rgba" => {}
            _ => {
                return Err(PaletteError::Config {
                    message: format!(
                        "Invalid output format: {}. Must be one of: hex, json, rgba",
                        self.output.format
                    ),
                });
            }
        }

        if self.render.width == 0 || self.render.row_height == 0 {
            return Err(PaletteError::Config {
                message: "Image width and row height must be positive".to_string(),
            });
        }

        self.palette.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            palette: PaletteOptions::default(),
            render: RenderConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            row_height: default_row_height(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            image: None,
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_row_height() -> u32 {
    DEFAULT_ROW_HEIGHT
}

fn default_format() -> String {
    "hex".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
