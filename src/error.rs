//! Error types for plot-palette.
//!
//! A single error enum covers every failure the library can report. Errors are
//! raised where the misuse happens (construction or lookup) and propagate to
//! the caller unchanged.

use thiserror::Error;

/// The main error type for plot-palette operations.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The color source is neither a known colormap name nor a usable color list
    #[error("Invalid color source: {message}")]
    InvalidSource { message: String },

    /// A registry colormap has a representation the palette builder cannot use
    #[error("Not implemented: {message}")]
    Unsupported { message: String },

    /// Integer lookup outside the discrete palette
    #[error("Index {index} out of range for palette of {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for Results with PaletteError
pub type Result<T> = std::result::Result<T, PaletteError>;
