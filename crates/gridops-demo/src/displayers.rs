//! Display sinks used by the demo binary.

use std::fs;
use std::path::{Path, PathBuf};

use gridops_core::display::{DisplayError, Displayer, Legend};
use gridops_core::render::encode_png;
use gridops_core::{Grid, Sample};
use log::{info, log_enabled, Level};

/// Writes each grid as text through the `log` facade.
///
/// One record for the title and legend, then one record per row.
#[derive(Debug, Default)]
pub struct LogDisplayer;

impl LogDisplayer {
    pub fn new() -> Self {
        Self
    }
}

impl Displayer for LogDisplayer {
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError> {
        if !log_enabled!(Level::Info) {
            return Ok(());
        }

        let legend = Legend::of(grid);
        info!(
            "{} ({}x{}), legend [{}, {}]",
            title,
            grid.rows(),
            grid.cols(),
            format_sample(legend.min),
            format_sample(legend.max)
        );
        for row in grid.iter_rows() {
            info!("  {}", format_row(row));
        }
        Ok(())
    }
}

/// Integers print bare, fractional values with three decimals.
fn format_sample(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

fn format_row<T: Sample>(row: &[T]) -> String {
    row.iter()
        .map(|v| format!("{:>7}", format_sample(v.to_f64())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders each grid to a numbered PNG file in a directory.
///
/// Files are named after the order and title they were shown with, e.g.
/// `03_sum_image.png`.
#[derive(Debug)]
pub struct PngDisplayer {
    dir: PathBuf,
    cell_size: u32,
    shown: usize,
}

impl PngDisplayer {
    /// Create the sink, creating `dir` if it does not exist.
    pub fn new(dir: impl Into<PathBuf>, cell_size: u32) -> Result<Self, DisplayError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| DisplayError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            cell_size,
            shown: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Displayer for PngDisplayer {
    fn show<T: Sample>(&mut self, title: &str, grid: &Grid<T>) -> Result<(), DisplayError> {
        let png = encode_png(grid, self.cell_size).map_err(|source| DisplayError::Render {
            title: title.to_string(),
            source,
        })?;

        self.shown += 1;
        let path = self
            .dir
            .join(format!("{:02}_{}.png", self.shown, file_stem(title)));
        fs::write(&path, png).map_err(|source| DisplayError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Lowercase the title and join alphanumeric runs with underscores.
fn file_stem(title: &str) -> String {
    let stem = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "grid".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridops_core::samples::base_image;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Original Image 1"), "original_image_1");
        assert_eq!(file_stem("Sum Image"), "sum_image");
        assert_eq!(file_stem("  a/b -- c "), "a_b_c");
        assert_eq!(file_stem("***"), "grid");
    }

    #[test]
    fn test_format_sample() {
        assert_eq!(format_sample(250.0), "250");
        assert_eq!(format_sample(1.6666666), "1.667");
        assert_eq!(format_sample(0.0), "0");
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[10u8, 250]), "     10     250");
    }

    #[test]
    fn test_log_displayer_never_fails() {
        let mut sink = LogDisplayer::new();
        assert!(sink.show("Original Image 1", &base_image()).is_ok());
    }

    #[test]
    fn test_png_displayer_writes_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngDisplayer::new(dir.path().join("renders"), 4).unwrap();

        sink.show("Original Image 1", &base_image()).unwrap();
        sink.show("Division Image", &base_image().map(|v| v as f32 / 3.0))
            .unwrap();

        let first = sink.dir().join("01_original_image_1.png");
        let second = sink.dir().join("02_division_image.png");
        assert!(first.is_file());
        assert!(second.is_file());

        let bytes = fs::read(first).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_png_displayer_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngDisplayer::new(dir.path(), 0).unwrap();

        let err = sink.show("Sum Image", &base_image()).unwrap_err();
        assert!(matches!(err, DisplayError::Render { .. }));
        assert!(err.to_string().contains("Sum Image"));
    }
}
