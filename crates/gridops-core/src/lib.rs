//! gridops core - images as matrices
//!
//! This crate provides elementary image-as-matrix operations: elementwise
//! arithmetic between two images and geometric resampling of a single image
//! (scale, translate, rotate, shear). Results are handed to an injected
//! [`Displayer`] rather than displayed directly, so every operation can be
//! exercised headlessly.

pub mod arithmetic;
pub mod display;
pub mod grid;
pub mod render;
pub mod samples;
pub mod transform;

pub use arithmetic::{add, divide, multiply, subtract, OverflowPolicy};
pub use display::{DisplayError, Displayer, Legend, MemoryDisplayer};
pub use grid::{Grid, GridError, Sample};
pub use render::{encode_png, RenderError};
pub use transform::{rotate, scale, shear, translate, Transform, TransformError};
