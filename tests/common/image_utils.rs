//! Image utilities for testing.
//!
//! This module provides helper functions for loading and checking rendered
//! palette images in tests.

#![allow(dead_code)]

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Load an image from a byte array
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Count the distinct colors along one row of an image
pub fn distinct_colors_in_row(image: &DynamicImage, y: u32) -> usize {
    let mut seen: Vec<[u8; 4]> = Vec::new();
    for x in 0..image.width() {
        let pixel = image.get_pixel(x, y).0;
        if seen.last() != Some(&pixel) && !seen.contains(&pixel) {
            seen.push(pixel);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_distinct_colors_in_row() {
        let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(4, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        img.put_pixel(1, 0, Rgba([1, 2, 3, 255]));
        img.put_pixel(2, 0, Rgba([9, 9, 9, 255]));
        img.put_pixel(3, 0, Rgba([9, 9, 9, 255]));
        let img = DynamicImage::ImageRgba8(img);
        assert_eq!(distinct_colors_in_row(&img, 0), 2);
    }
}
