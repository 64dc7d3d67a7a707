//! Diagnostic rendering of palettes.
//!
//! `visualize` draws two stacked strips: the continuous map sampled at
//! `bin_count` cells on top, the discrete map at `color_count` cells below.
//! Cell values are evenly spaced in [0, 1] and pass through the palette's
//! normalizer, as any plotted data would.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use ndarray::{Array1, ArrayView2, Axis};
use tracing::debug;

use crate::colormaps::Colormap;
use crate::error::{PaletteError, Result};
use crate::norm::Normalizer;
use crate::palette::PaletteBuilder;

/// Default image width in pixels
pub const DEFAULT_WIDTH: u32 = 1000;

/// Default height of each strip in pixels
pub const DEFAULT_ROW_HEIGHT: u32 = 50;

impl PaletteBuilder {
    /// Render the continuous and discrete maps as two strips
    pub fn visualize(&self, width: u32, row_height: u32) -> Result<RgbaImage> {
        visualize(self, width, row_height)
    }

    /// Render and write a PNG
    pub fn save_visualization(&self, path: &Path, width: u32, row_height: u32) -> Result<()> {
        let img = self.visualize(width, row_height)?;
        img.save_with_format(path, ImageFormat::Png)?;
        debug!(path = %path.display(), width, height = img.height(), "Saved palette image");
        Ok(())
    }
}

/// Render the continuous and discrete maps of `palette` as two strips
pub fn visualize(palette: &PaletteBuilder, width: u32, row_height: u32) -> Result<RgbaImage> {
    if width == 0 {
        return Err(PaletteError::InvalidParameter {
            param: "width".to_string(),
            message: "Image width must be at least 1 pixel".to_string(),
        });
    }
    if row_height == 0 {
        return Err(PaletteError::InvalidParameter {
            param: "row_height".to_string(),
            message: "Row height must be at least 1 pixel".to_string(),
        });
    }

    let mut img = ImageBuffer::new(width, row_height * 2);

    let bins = cell_grid(palette.bin_count());
    let sets = cell_grid(palette.color_count());

    draw_strip(
        &mut img,
        0,
        row_height,
        bins.view(),
        palette.continuous(),
        palette.normalizer(),
    );
    draw_strip(
        &mut img,
        row_height,
        row_height,
        sets.view(),
        palette.discrete(),
        palette.normalizer(),
    );

    Ok(img)
}

/// Encode an image as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// One row of `n` evenly spaced values
fn cell_grid(n: usize) -> ndarray::Array2<f64> {
    Array1::linspace(0.0, 1.0, n).insert_axis(Axis(0))
}

fn draw_strip(
    img: &mut RgbaImage,
    top: u32,
    row_height: u32,
    cells: ArrayView2<f64>,
    colormap: &dyn Colormap,
    normalizer: &Normalizer,
) {
    let n = cells.ncols();
    let width = img.width();

    for x in 0..width {
        // Pixel columns split evenly across the cells
        let cell = ((x as u64 * n as u64) / width as u64) as usize;
        let value = cells[[0, cell.min(n - 1)]];
        let color = colormap.map_rgba8(normalizer.normalize(value));

        for y in top..top + row_height {
            img.put_pixel(x, y, Rgba(color));
        }
    }
}
