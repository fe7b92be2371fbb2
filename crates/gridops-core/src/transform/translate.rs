//! Integer translation with clipping.

use log::{debug, trace};

use crate::grid::{Grid, Sample};

/// Shift an image by `dx` columns and `dy` rows.
///
/// The output keeps the input dimensions. Source cell `(i, j)` moves to
/// `(i + dy, j + dx)`; samples whose destination leaves the grid are
/// dropped, and cells nothing moves into stay zero.
///
/// # Example
///
/// ```
/// use gridops_core::{transform::translate, Grid};
///
/// let img = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
/// let shifted = translate(&img, 1, 0);
/// assert_eq!(shifted.as_slice(), &[0, 1, 0, 3]);
/// ```
pub fn translate<T: Sample>(image: &Grid<T>, dx: i64, dy: i64) -> Grid<T> {
    let mut output = image.zeros_like();
    let mut dropped = 0usize;

    for (i, row) in image.iter_rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let new_i = (i as i64).saturating_add(dy);
            let new_j = (j as i64).saturating_add(dx);
            match output.checked_index(new_i, new_j) {
                Some((new_i, new_j)) => output.set(new_i, new_j, value),
                None => dropped += 1,
            }
        }
    }

    debug!(
        "translate: {}x{} by dx={} dy={}",
        image.rows(),
        image.cols(),
        dx,
        dy
    );
    trace!("translate: {} samples clipped", dropped);

    output
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid_strategy() -> impl Strategy<Value = Grid<u8>> {
        (1usize..=16, 1usize..=16).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<u8>(), rows * cols)
                .prop_map(move |data| Grid::from_vec(rows, cols, data).unwrap())
        })
    }

    proptest! {
        /// Property: a zero shift is the identity.
        #[test]
        fn prop_identity(img in grid_strategy()) {
            prop_assert_eq!(translate(&img, 0, 0), img);
        }

        /// Property: every written cell holds the sample from (i - dy, j - dx).
        #[test]
        fn prop_shifted_cells_match_source(
            img in grid_strategy(),
            dx in -20i64..=20,
            dy in -20i64..=20,
        ) {
            let result = translate(&img, dx, dy);
            prop_assert_eq!(result.dimensions(), img.dimensions());

            for i in 0..result.rows() {
                for j in 0..result.cols() {
                    let src = img.checked_index(i as i64 - dy, j as i64 - dx);
                    let expected = src.map_or(0, |(si, sj)| img.get(si, sj));
                    prop_assert_eq!(result.get(i, j), expected);
                }
            }
        }
    }
}
