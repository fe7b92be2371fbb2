//! Nearest-neighbor scaling via inverse mapping.
//!
//! For a factor `f`, the output is `floor(rows * f)` by `floor(cols * f)`.
//! Each output cell `(i, j)` reads source cell `(floor(i / f), floor(j / f))`.
//! Magnification duplicates source samples, minification skips some.

use log::debug;

use super::TransformError;
use crate::grid::{Grid, Sample};

/// Scale an image by `factor` using truncating nearest-neighbor lookup.
///
/// # Errors
///
/// - `TransformError::InvalidScaleFactor` if `factor` is not a positive,
///   finite number. Checked before anything is allocated.
/// - `TransformError::EmptyOutput` if the factor is so small that an output
///   dimension truncates to zero.
/// - `TransformError::Grid` if the output is too large to allocate.
///
/// # Example
///
/// ```
/// use gridops_core::{transform::scale, Grid};
///
/// let img = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
/// let scaled = scale(&img, 2.0).unwrap();
/// assert_eq!(scaled.dimensions(), (4, 4));
/// assert_eq!(scaled.get(3, 3), 4);
/// ```
pub fn scale<T: Sample>(image: &Grid<T>, factor: f64) -> Result<Grid<T>, TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }

    let (src_rows, src_cols) = image.dimensions();
    let out_rows = scaled_extent(src_rows, factor);
    let out_cols = scaled_extent(src_cols, factor);
    if out_rows == 0 || out_cols == 0 {
        return Err(TransformError::EmptyOutput {
            rows: out_rows,
            cols: out_cols,
        });
    }

    let mut output = Grid::zeros(out_rows, out_cols)?;

    for i in 0..out_rows {
        let src_i = source_index(i, factor, src_rows);
        for j in 0..out_cols {
            let src_j = source_index(j, factor, src_cols);
            output.set(i, j, image.get(src_i, src_j));
        }
    }

    debug!(
        "scale: {}x{} -> {}x{} (factor {})",
        src_rows, src_cols, out_rows, out_cols, factor
    );

    Ok(output)
}

/// Output length along one axis: `floor(len * factor)`.
#[inline]
fn scaled_extent(len: usize, factor: f64) -> usize {
    (len as f64 * factor).floor() as usize
}

/// Source index for output index `dst`: `floor(dst / factor)`.
///
/// Since `dst < floor(len * factor)`, the quotient is below `len`; the
/// clamp only absorbs floating point error at the last index.
#[inline]
fn source_index(dst: usize, factor: f64, len: usize) -> usize {
    ((dst as f64 / factor).floor() as usize).min(len - 1)
}
