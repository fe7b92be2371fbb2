//! Demo configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! reproduces the stock demonstration:
//!
//! ```json
//! {
//!   "overflow": "wrapping",
//!   "cell_size": 32,
//!   "output_dir": "out",
//!   "transforms": [
//!     { "op": "scale", "factor": 1.5 },
//!     { "op": "translate", "dx": 2, "dy": 1 },
//!     { "op": "rotate", "degrees": 45.0 },
//!     { "op": "shear", "shx": 0.5, "shy": 0.5 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use gridops_core::{OverflowPolicy, Transform};
use serde::Deserialize;

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Overflow rule for add, subtract and multiply.
    pub overflow: OverflowPolicy,
    /// Geometric transforms applied, each to the base image.
    pub transforms: Vec<Transform>,
    /// Directory for rendered PNGs; nothing is written when unset.
    pub output_dir: Option<PathBuf>,
    /// Edge length in pixels of one rendered cell.
    pub cell_size: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            transforms: Transform::demo_sequence(),
            output_dir: None,
            cell_size: 32,
        }
    }
}

impl DemoConfig {
    /// Reject settings that would only fail later, mid-run.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be non-zero");
        Ok(())
    }
}

/// Parse a configuration from JSON text.
pub fn parse_config(text: &str) -> Result<DemoConfig> {
    let config: DemoConfig = serde_json::from_str(text).context("invalid configuration")?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to load config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert_eq!(config.transforms, Transform::demo_sequence());
        assert_eq!(config.output_dir, None);
        assert_eq!(config.cell_size, 32);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"{
                "overflow": "saturating",
                "cell_size": 8,
                "output_dir": "renders",
                "transforms": [
                    { "op": "rotate", "degrees": 30.0 },
                    { "op": "translate", "dx": -1, "dy": 3 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.overflow, OverflowPolicy::Saturating);
        assert_eq!(config.cell_size, 8);
        assert_eq!(config.output_dir, Some(PathBuf::from("renders")));
        assert_eq!(
            config.transforms,
            vec![
                Transform::Rotate { degrees: 30.0 },
                Transform::Translate { dx: -1, dy: 3 },
            ]
        );
    }

    #[test]
    fn test_unknown_op_rejected() {
        let err = parse_config(r#"{ "transforms": [{ "op": "warp" }] }"#).unwrap_err();
        assert!(format!("{err:#}").contains("invalid configuration"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(parse_config(r#"{ "overflow": "clamp" }"#).is_err());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let err = parse_config(r#"{ "cell_size": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("cell_size"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/gridops.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        fs::write(&path, r#"{ "overflow": "saturating" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Saturating);
        assert_eq!(config.transforms.len(), 4);
    }
}
