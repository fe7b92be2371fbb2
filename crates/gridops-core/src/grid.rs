//! The grid data model shared by every operation.
//!
//! A [`Grid`] is a rectangular, row-major 2D buffer of samples. Grids are
//! built once, either from literal data or as a zero-filled output buffer,
//! and are never resized in place. Transforms read an input grid and write
//! into a freshly allocated output grid.
//!
//! # Coordinate System
//!
//! - `(row, col)`, 0-indexed, origin at the top-left corner
//! - `row` in `[0, rows)`, `col` in `[0, cols)`

use std::fmt;

use thiserror::Error;

/// Errors that can occur when building or combining grids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns is zero
    #[error("Invalid dimensions: rows ({rows}) and cols ({cols}) must be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Sample buffer length doesn't match rows * cols
    #[error("Invalid sample data: expected {expected} samples (rows * cols), got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// A literal row has a different length than the first row
    #[error("Ragged row {row}: expected {expected} samples, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The sample buffer for these dimensions cannot be allocated
    #[error("Grid too large: {rows}x{cols} samples cannot be allocated")]
    TooLarge { rows: usize, cols: usize },

    /// Two grids combined elementwise have different dimensions
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// A numeric sample type that can be stored in a [`Grid`].
///
/// `Default::default()` is the zero-fill value of freshly allocated grids.
pub trait Sample: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Widen the sample for display and statistics.
    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

fn sample_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    rows.checked_mul(cols)
        .ok_or(GridError::TooLarge { rows, cols })
}

/// A rectangular, row-major 2D container of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Sample> Grid<T> {
    /// Allocate a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero and
    /// `GridError::TooLarge` if `rows * cols` samples cannot be allocated.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let len = sample_count(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { rows, cols })?;
        data.resize(len, fill);
        Ok(Self { rows, cols, data })
    }

    /// Allocate a zero-filled grid.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(rows, cols, T::default())
    }

    /// Zero-filled grid for dimensions already known to be positive.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "blank grid must have cells");
        match Self::zeros(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Zero-filled grid with the same dimensions as `self`.
    pub(crate) fn zeros_like(&self) -> Self {
        Self::blank(self.rows, self.cols)
    }

    /// Build a grid from a row-major sample buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let expected = sample_count(rows, cols)?;
        if data.len() != expected {
            return Err(GridError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from literal nested rows.
    ///
    /// # Example
    ///
    /// ```
    /// use gridops_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 3));
    /// assert_eq!(grid.get(1, 0), 4);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(sample_count(rows.len(), cols).unwrap_or(0));
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the sample at `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds; callers check bounds first.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Checked read, `None` outside the grid.
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Overwrite the sample at `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds; callers check bounds first.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Convert a signed coordinate into in-bounds indices.
    ///
    /// Returns `None` for anything outside `[0, rows) x [0, cols)`, which is
    /// how forward-mapping transforms clip their destinations.
    #[inline]
    pub fn checked_index(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Row-major view of all samples.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid, returning its row-major samples.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }

    /// Build a new grid by applying `f` to every sample.
    pub fn map<U: Sample>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Build a new grid by combining samples of two equally sized grids.
    ///
    /// # Errors
    ///
    /// Returns `GridError::ShapeMismatch` if the dimensions differ.
    pub fn zip_map<U: Sample, V: Sample>(
        &self,
        other: &Grid<U>,
        f: impl Fn(T, U) -> V,
    ) -> Result<Grid<V>, GridError> {
        if self.dimensions() != other.dimensions() {
            return Err(GridError::ShapeMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}
