//! Grayscale rasterization of grids.
//!
//! Grids are drawn with nearest-neighbor blocks: every cell becomes a
//! `cell_size x cell_size` square whose gray level is the cell value mapped
//! through the grid's [`Legend`]. A legend strip is drawn to the right of
//! the raster, separated by a white gap: a vertical gradient from the
//! legend maximum (white, top) to the minimum (black, bottom).
//!
//! ```text
//! +-----------+   +--+
//! |           |   |##|  <- max
//! |   cells   |   |  |
//! |           |   |  |  <- min
//! +-----------+   +--+
//!   cols*cell  gap legend
//! ```

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};
use thiserror::Error;

use crate::display::Legend;
use crate::grid::{Grid, Sample};

/// Errors that can occur while rendering a grid.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Cell size is zero
    #[error("Invalid cell size: must be non-zero")]
    InvalidCellSize,

    /// The raster would not fit in 32-bit image dimensions
    #[error("Raster too large: {rows}x{cols} cells at {cell_size}px")]
    TooLarge {
        rows: usize,
        cols: usize,
        cell_size: u32,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Gray level of the gap between raster and legend strip.
const GAP_LEVEL: u8 = 255;

/// Rasterize `grid`, including the legend strip.
///
/// # Errors
///
/// - `RenderError::InvalidCellSize` if `cell_size` is zero
/// - `RenderError::TooLarge` if the raster exceeds `u32` dimensions
pub fn to_gray_image<T: Sample>(grid: &Grid<T>, cell_size: u32) -> Result<GrayImage, RenderError> {
    if cell_size == 0 {
        return Err(RenderError::InvalidCellSize);
    }

    let too_large = || RenderError::TooLarge {
        rows: grid.rows(),
        cols: grid.cols(),
        cell_size,
    };
    let raster_w = u32::try_from(grid.cols())
        .ok()
        .and_then(|c| c.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let height = u32::try_from(grid.rows())
        .ok()
        .and_then(|r| r.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let legend_x = raster_w.checked_add(cell_size).ok_or_else(too_large)?;
    let width = legend_x.checked_add(cell_size).ok_or_else(too_large)?;

    let legend = Legend::of(grid);
    let mut img = GrayImage::from_pixel(width, height, Luma([GAP_LEVEL]));

    for (i, row) in grid.iter_rows().enumerate() {
        for (j, value) in row.iter().enumerate() {
            let level = legend.normalize(value.to_f64());
            let x0 = j as u32 * cell_size;
            let y0 = i as u32 * cell_size;
            for y in y0..y0 + cell_size {
                for x in x0..x0 + cell_size {
                    img.put_pixel(x, y, Luma([level]));
                }
            }
        }
    }

    for y in 0..height {
        let level = legend_level(y, height);
        for x in legend_x..width {
            img.put_pixel(x, y, Luma([level]));
        }
    }

    Ok(img)
}

/// Gradient value of the legend strip at row `y`: 255 at the top, 0 at the
/// bottom.
#[inline]
fn legend_level(y: u32, height: u32) -> u8 {
    if height <= 1 {
        return 255;
    }
    let t = (height - 1 - y) as f64 / (height - 1) as f64;
    (t * 255.0).round() as u8
}

/// Render `grid` to PNG bytes.
///
/// # Example
///
/// ```
/// use gridops_core::{render::encode_png, samples::base_image};
///
/// let png = encode_png(&base_image(), 16).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png<T: Sample>(grid: &Grid<T>, cell_size: u32) -> Result<Vec<u8>, RenderError> {
    let img = to_gray_image(grid, cell_size)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::L8)
        .map_err(|e| RenderError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
