//! Visualization as an injected sink.
//!
//! Operations never display anything themselves. Callers hand finished
//! grids to a [`Displayer`], which must show exactly the values it is given.
//! [`MemoryDisplayer`] records frames for headless use, and a pair of
//! displayers `(A, B)` shows every grid on both.

use std::path::PathBuf;

use thiserror::Error;

use crate::grid::{Grid, Sample};
use crate::render::RenderError;

/// Errors that can occur while showing a grid.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Rasterizing the grid failed
    #[error("Failed to render '{title}': {source}")]
    Render {
        title: String,
        #[source]
        source: RenderError,
    },

    /// Writing rendered output failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A sink that shows a titled grid.
pub trait Displayer {
    /// Show `grid` under `title`.
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError>;
}

impl<D: Displayer + ?Sized> Displayer for &mut D {
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError> {
        (**self).show(title, grid)
    }
}

impl<A: Displayer, B: Displayer> Displayer for (A, B) {
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError> {
        self.0.show(title, grid)?;
        self.1.show(title, grid)
    }
}

/// The value range a grid is displayed with.
///
/// Rasters map `min` to black and `max` to white, like an auto-scaled
/// colorbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    pub min: f64,
    pub max: f64,
}

impl Legend {
    /// Compute the value range of `grid`, ignoring NaN samples.
    pub fn of<T: Sample>(grid: &Grid<T>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in grid.as_slice().iter().map(|v| v.to_f64()) {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            // Every sample was NaN
            return Self { min: 0.0, max: 0.0 };
        }
        Self { min, max }
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` linearly onto `0..=255`.
    ///
    /// A zero-width range maps everything to 0.
    pub fn normalize(&self, value: f64) -> u8 {
        let span = self.span();
        if span <= 0.0 || !value.is_finite() {
            return 0;
        }
        (((value - self.min) / span) * 255.0).clamp(0.0, 255.0).round() as u8
    }
}

/// One grid captured by [`MemoryDisplayer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    /// Row-major samples widened to `f64`.
    pub values: Vec<f64>,
}

/// Records every shown grid in memory.
#[derive(Debug, Default)]
pub struct MemoryDisplayer {
    frames: Vec<Frame>,
}

impl MemoryDisplayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Titles in the order they were shown.
    pub fn titles(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.title.as_str()).collect()
    }

    /// The most recent frame with `title`.
    pub fn frame(&self, title: &str) -> Option<&Frame> {
        self.frames.iter().rev().find(|f| f.title == title)
    }
}

impl Displayer for MemoryDisplayer {
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError> {
        self.frames.push(Frame {
            title: title.to_string(),
            rows: grid.rows(),
            cols: grid.cols(),
            values: grid.as_slice().iter().map(|v| v.to_f64()).collect(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::base_image;

    #[test]
    fn test_memory_displayer_records_exact_values() {
        let img = base_image();
        let mut sink = MemoryDisplayer::new();
        sink.show("Original Image 1", &img).unwrap();

        let frame = sink.frame("Original Image 1").unwrap();
        assert_eq!((frame.rows, frame.cols), (5, 5));
        assert_eq!(frame.values[0], 10.0);
        assert_eq!(frame.values[24], 250.0);
    }

    #[test]
    fn test_memory_displayer_f32() {
        let grid = Grid::from_rows(&[[0.25f32, 1.5]]).unwrap();
        let mut sink = MemoryDisplayer::new();
        sink.show("Division Image", &grid).unwrap();
        assert_eq!(sink.frames()[0].values, vec![0.25, 1.5]);
    }

    #[test]
    fn test_pair_shows_on_both() {
        let img = base_image();
        let mut pair = (MemoryDisplayer::new(), MemoryDisplayer::new());
        pair.show("A", &img).unwrap();
        pair.show("B", &img).unwrap();

        assert_eq!(pair.0.titles(), vec!["A", "B"]);
        assert_eq!(pair.1.titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_mut_ref_displayer() {
        fn show_original<D: Displayer>(mut sink: D) {
            sink.show("Original", &base_image()).unwrap();
        }

        let mut sink = MemoryDisplayer::new();
        show_original(&mut sink);
        show_original(&mut sink);
        assert_eq!(sink.titles(), vec!["Original", "Original"]);
    }

    #[test]
    fn test_legend_range() {
        let legend = Legend::of(&base_image());
        assert_eq!(legend, Legend { min: 10.0, max: 250.0 });
        assert_eq!(legend.span(), 240.0);
    }

    #[test]
    fn test_legend_normalize() {
        let legend = Legend {
            min: 10.0,
            max: 250.0,
        };
        assert_eq!(legend.normalize(10.0), 0);
        assert_eq!(legend.normalize(250.0), 255);
        assert_eq!(legend.normalize(130.0), 128);
        // Outside the range clamps
        assert_eq!(legend.normalize(0.0), 0);
        assert_eq!(legend.normalize(1000.0), 255);
    }

    #[test]
    fn test_legend_constant_grid() {
        let grid = Grid::new(2, 2, 7u8).unwrap();
        let legend = Legend::of(&grid);
        assert_eq!(legend.span(), 0.0);
        assert_eq!(legend.normalize(7.0), 0);
    }

    #[test]
    fn test_legend_ignores_nan() {
        let grid = Grid::from_rows(&[[f32::NAN, 1.0, 3.0]]).unwrap();
        let legend = Legend::of(&grid);
        assert_eq!(legend, Legend { min: 1.0, max: 3.0 });

        let grid = Grid::new(1, 2, f32::NAN).unwrap();
        assert_eq!(Legend::of(&grid), Legend { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_display_error_message() {
        let err = DisplayError::Io {
            path: PathBuf::from("out/sum.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Failed to write out/sum.png: missing");
    }
}
