//! Axis shear with canvas growth.
//!
//! Source cell `(i, j)` moves to `(i + trunc(shy * j), j + trunc(shx * i))`.
//! The output canvas is grown once, before any writes, by the largest offset
//! a single-quadrant shear produces. This is a heuristic rather than a tight
//! bound: negative shear factors push samples to negative coordinates, which
//! are clipped like any other out-of-canvas destination.

use log::{debug, trace};

use super::truncate;
use crate::grid::{Grid, Sample};

/// Compute the output canvas for a shear of a `rows x cols` grid.
///
/// Returns `(rows + |trunc(shy * cols)|, cols + |trunc(shx * rows)|)`.
///
/// # Example
///
/// ```
/// use gridops_core::transform::sheared_dimensions;
///
/// assert_eq!(sheared_dimensions(5, 5, 0.5, 0.5), (7, 7));
/// assert_eq!(sheared_dimensions(5, 5, 0.0, 0.0), (5, 5));
/// ```
pub fn sheared_dimensions(rows: usize, cols: usize, shx: f64, shy: f64) -> (usize, usize) {
    let grow_rows = truncate(shy * cols as f64).unsigned_abs() as usize;
    let grow_cols = truncate(shx * rows as f64).unsigned_abs() as usize;
    (rows.saturating_add(grow_rows), cols.saturating_add(grow_cols))
}

/// Shear an image by `shx` (column offset per row) and `shy` (row offset
/// per column).
///
/// The output is sized by [`sheared_dimensions`]. Samples that land outside
/// it are dropped and cells nothing lands on stay zero. A NaN factor
/// contributes no offset on its axis.
///
/// # Panics
///
/// Panics if the grown canvas is too large to allocate, which takes a shear
/// factor in the order of `usize::MAX / (rows * cols)`.
pub fn shear<T: Sample>(image: &Grid<T>, shx: f64, shy: f64) -> Grid<T> {
    let (out_rows, out_cols) = sheared_dimensions(image.rows(), image.cols(), shx, shy);

    let mut output = Grid::blank(out_rows, out_cols);
    let mut dropped = 0usize;

    for (i, row) in image.iter_rows().enumerate() {
        let offset_j = truncate(shx * i as f64);
        for (j, &value) in row.iter().enumerate() {
            let new_i = (i as i64).saturating_add(truncate(shy * j as f64));
            let new_j = (j as i64).saturating_add(offset_j);

            match output.checked_index(new_i, new_j) {
                Some((new_i, new_j)) => output.set(new_i, new_j, value),
                None => dropped += 1,
            }
        }
    }

    debug!(
        "shear: {}x{} -> {}x{} (shx {}, shy {})",
        image.rows(),
        image.cols(),
        out_rows,
        out_cols,
        shx,
        shy
    );
    trace!("shear: {} samples clipped", dropped);

    output
}
