//! Elementwise arithmetic between two images.
//!
//! ## Overflow
//!
//! Sums, differences and products of 8-bit samples leave the `0..=255`
//! range. [`OverflowPolicy`] decides what happens:
//!
//! - **Wrapping** (default): modulo 256, e.g. `250 + 10 = 4`, `5 - 10 = 251`
//! - **Saturating**: clamp to the range, e.g. `250 + 10 = 255`, `5 - 10 = 0`
//!
//! The same policy is used for every integer operation of a call.
//!
//! ## Division
//!
//! [`divide`] computes `a / (b + 1)` in floating point. The `+ 1` happens
//! after widening, so the divisor lies in `1..=256` and is never zero.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridError};

/// How out-of-range integer results are brought back into `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Modulo 256, as fixed-width unsigned arithmetic does.
    #[default]
    Wrapping,
    /// Clamp to `0..=255`.
    Saturating,
}

impl OverflowPolicy {
    #[inline]
    fn add(self, a: u8, b: u8) -> u8 {
        match self {
            OverflowPolicy::Wrapping => a.wrapping_add(b),
            OverflowPolicy::Saturating => a.saturating_add(b),
        }
    }

    #[inline]
    fn sub(self, a: u8, b: u8) -> u8 {
        match self {
            OverflowPolicy::Wrapping => a.wrapping_sub(b),
            OverflowPolicy::Saturating => a.saturating_sub(b),
        }
    }

    #[inline]
    fn mul(self, a: u8, b: u8) -> u8 {
        match self {
            OverflowPolicy::Wrapping => a.wrapping_mul(b),
            OverflowPolicy::Saturating => a.saturating_mul(b),
        }
    }
}

/// Elementwise sum.
///
/// # Errors
///
/// Returns `GridError::ShapeMismatch` if the grids differ in size.
///
/// # Example
///
/// ```
/// use gridops_core::{arithmetic::{add, OverflowPolicy}, Grid};
///
/// let a = Grid::from_rows(&[[250u8]]).unwrap();
/// let b = Grid::from_rows(&[[10u8]]).unwrap();
/// assert_eq!(add(&a, &b, OverflowPolicy::Wrapping).unwrap().get(0, 0), 4);
/// assert_eq!(add(&a, &b, OverflowPolicy::Saturating).unwrap().get(0, 0), 255);
/// ```
pub fn add(a: &Grid<u8>, b: &Grid<u8>, policy: OverflowPolicy) -> Result<Grid<u8>, GridError> {
    a.zip_map(b, |x, y| policy.add(x, y))
}

/// Elementwise difference `a - b`.
///
/// # Errors
///
/// Returns `GridError::ShapeMismatch` if the grids differ in size.
pub fn subtract(
    a: &Grid<u8>,
    b: &Grid<u8>,
    policy: OverflowPolicy,
) -> Result<Grid<u8>, GridError> {
    a.zip_map(b, |x, y| policy.sub(x, y))
}

/// Elementwise (Hadamard) product, not a matrix product.
///
/// # Errors
///
/// Returns `GridError::ShapeMismatch` if the grids differ in size.
pub fn multiply(
    a: &Grid<u8>,
    b: &Grid<u8>,
    policy: OverflowPolicy,
) -> Result<Grid<u8>, GridError> {
    a.zip_map(b, |x, y| policy.mul(x, y))
}

/// Elementwise quotient `a / (b + 1)` as `f32`.
///
/// # Errors
///
/// Returns `GridError::ShapeMismatch` if the grids differ in size.
pub fn divide(a: &Grid<u8>, b: &Grid<u8>) -> Result<Grid<f32>, GridError> {
    a.zip_map(b, |x, y| (x as f64 / (y as f64 + 1.0)) as f32)
}
