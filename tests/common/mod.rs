//! Common test utilities for plot-palette.
//!
//! This module provides shared utilities for testing palettes and their images.

// Re-export all common test utilities
pub mod assertions;
pub mod image_utils;
