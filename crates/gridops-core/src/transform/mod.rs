//! Geometric resampling: scale, translate, rotate and shear.
//!
//! Every transform reads an input grid and returns a brand-new grid whose
//! cells start at the zero-fill value. Inputs are never modified.
//!
//! # Mapping Strategies
//!
//! - **Scale** uses inverse mapping: every output cell looks up its source
//!   cell, so the output has no holes.
//! - **Translate**, **Rotate** and **Shear** use forward mapping: every
//!   source cell computes its destination. Destinations outside the output
//!   are dropped (clipped), and output cells that receive no sample keep the
//!   zero-fill value.
//!
//! # Canvas Policy
//!
//! Translate and rotate keep the input dimensions. Shear grows the canvas
//! by the largest offset its parameters produce. Scale sizes the output by
//! the factor.
//!
//! # Coordinate System
//!
//! - `(row, col)` with the origin at the top-left corner
//! - Rotation angles are in degrees
//! - All real-to-integer conversions truncate toward zero

mod rotate;
mod scale;
mod shear;
mod translate;

pub use rotate::rotate;
pub use scale::scale;
pub use shear::{shear, sheared_dimensions};
pub use translate::translate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Grid, GridError, Sample};

/// Errors that can occur during a geometric transform.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Scale factor is zero, negative or not finite
    #[error("Invalid scale factor {0}: must be a positive finite number")]
    InvalidScaleFactor(f64),

    /// The scaled output would have no rows or no columns
    #[error("Scaled output would be empty ({rows}x{cols})")]
    EmptyOutput { rows: usize, cols: usize },

    /// Allocating the output grid failed
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Round toward zero, matching an integer cast from a real number.
///
/// NaN becomes 0 and infinities saturate to the `i64` range.
#[inline]
pub(crate) fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// A geometric transform together with its parameters.
///
/// Serialized with an `op` tag, e.g. `{"op": "rotate", "degrees": 45.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transform {
    /// Nearest-neighbor scaling by a positive factor.
    Scale { factor: f64 },
    /// Integer shift: `dx` along columns, `dy` along rows.
    Translate { dx: i64, dy: i64 },
    /// Rotation about the grid center, in degrees.
    Rotate { degrees: f64 },
    /// Axis shear along columns (`shx`) and rows (`shy`).
    Shear { shx: f64, shy: f64 },
}

impl Transform {
    /// Apply this transform to `image`.
    ///
    /// # Errors
    ///
    /// Only `Scale` can fail, see [`scale`].
    pub fn apply<T: Sample>(&self, image: &Grid<T>) -> Result<Grid<T>, TransformError> {
        match *self {
            Transform::Scale { factor } => scale(image, factor),
            Transform::Translate { dx, dy } => Ok(translate(image, dx, dy)),
            Transform::Rotate { degrees } => Ok(rotate(image, degrees)),
            Transform::Shear { shx, shy } => Ok(shear(image, shx, shy)),
        }
    }

    /// Display title for the result of this transform.
    pub fn title(&self) -> &'static str {
        match self {
            Transform::Scale { .. } => "Scaled Image",
            Transform::Translate { .. } => "Translated Image",
            Transform::Rotate { .. } => "Rotated Image",
            Transform::Shear { .. } => "Sheared Image",
        }
    }

    /// The demonstration parameters: scale 1.5, shift (2, 1), rotate 45
    /// degrees, shear 0.5 on both axes.
    pub fn demo_sequence() -> Vec<Transform> {
        vec![
            Transform::Scale { factor: 1.5 },
            Transform::Translate { dx: 2, dy: 1 },
            Transform::Rotate { degrees: 45.0 },
            Transform::Shear { shx: 0.5, shy: 0.5 },
        ]
    }
}
