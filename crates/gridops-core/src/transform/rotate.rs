//! Rotation about the grid center via forward mapping.
//!
//! # Algorithm
//!
//! The center is `(rows / 2, cols / 2)` with integer division, so for
//! even-sized grids it sits half a cell off the geometric center. For each
//! source cell `(i, j)`:
//!
//! ```text
//! di = i - center_row
//! dj = j - center_col
//! new_i = trunc(di * cos(θ) - dj * sin(θ)) + center_row
//! new_j = trunc(di * sin(θ) + dj * cos(θ)) + center_col
//! ```
//!
//! Because each source cell is pushed to one destination, some output
//! cells receive no sample at all. Those holes keep the zero-fill value.

use log::{debug, trace};

use super::truncate;
use crate::grid::{Grid, Sample};

/// Rotate an image about its center by `angle_degrees`.
///
/// The output keeps the input dimensions; destinations outside it are
/// dropped. A non-finite angle has no defined rotation: every offset
/// truncates to zero, so all samples land on the center cell and the last
/// one in row-major order wins.
///
/// # Example
///
/// ```
/// use gridops_core::{transform::rotate, samples::base_image};
///
/// let img = base_image();
/// assert_eq!(rotate(&img, 0.0), img);
/// ```
pub fn rotate<T: Sample>(image: &Grid<T>, angle_degrees: f64) -> Grid<T> {
    let angle_rad = angle_degrees.to_radians();
    let (sin, cos) = angle_rad.sin_cos();

    let center_row = (image.rows() / 2) as i64;
    let center_col = (image.cols() / 2) as i64;

    let mut output = image.zeros_like();
    let mut written = 0usize;

    for (i, row) in image.iter_rows().enumerate() {
        let di = (i as i64 - center_row) as f64;
        for (j, &value) in row.iter().enumerate() {
            let dj = (j as i64 - center_col) as f64;

            let new_i = truncate(di * cos - dj * sin) + center_row;
            let new_j = truncate(di * sin + dj * cos) + center_col;

            if let Some((new_i, new_j)) = output.checked_index(new_i, new_j) {
                output.set(new_i, new_j, value);
                written += 1;
            }
        }
    }

    debug!(
        "rotate: {}x{} by {} degrees about ({}, {})",
        image.rows(),
        image.cols(),
        angle_degrees,
        center_row,
        center_col
    );
    trace!("rotate: {} of {} samples kept", written, image.len());

    output
}
