//! The two 5x5 demonstration images.

use crate::grid::Grid;

/// 5x5 grid of `10, 20, ..., 250`, row-major.
pub fn base_image() -> Grid<u8> {
    sequence(10)
}

/// 5x5 grid of `5, 10, ..., 125`, row-major.
pub fn overlay_image() -> Grid<u8> {
    sequence(5)
}

fn sequence(step: u8) -> Grid<u8> {
    let mut grid = Grid::blank(5, 5);
    for i in 0..5 {
        for j in 0..5 {
            grid.set(i, j, step * (i * 5 + j + 1) as u8);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_image() {
        let img = base_image();
        assert_eq!(img.dimensions(), (5, 5));
        assert_eq!(img.get(0, 0), 10);
        assert_eq!(img.get(0, 4), 50);
        assert_eq!(img.get(1, 0), 60);
        assert_eq!(img.get(4, 4), 250);
    }

    #[test]
    fn test_overlay_image() {
        let img = overlay_image();
        assert_eq!(
            img,
            Grid::from_rows(&[
                [5u8, 10, 15, 20, 25],
                [30, 35, 40, 45, 50],
                [55, 60, 65, 70, 75],
                [80, 85, 90, 95, 100],
                [105, 110, 115, 120, 125],
            ])
            .unwrap()
        );
    }

    #[test]
    fn test_factories_return_fresh_grids() {
        let mut a = base_image();
        a.set(0, 0, 0);
        assert_eq!(base_image().get(0, 0), 10);
    }
}
