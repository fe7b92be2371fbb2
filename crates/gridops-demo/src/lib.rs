//! gridops demo - the end-to-end walkthrough
//!
//! Builds the two sample images and shows, in order:
//!
//! 1. Both originals
//! 2. Sum, difference, product and quotient of the two
//! 3. Each configured geometric transform of the first image
//!
//! Transforms are not chained: each one starts from the base image.

pub mod config;
pub mod displayers;

use anyhow::{Context, Result};
use gridops_core::samples::{base_image, overlay_image};
use gridops_core::{add, divide, multiply, subtract, Displayer};
use log::info;

pub use config::{load_config, parse_config, DemoConfig};
pub use displayers::{LogDisplayer, PngDisplayer};

/// Run the walkthrough, showing every result on `displayer`.
pub fn run_demo<D: Displayer>(config: &DemoConfig, displayer: &mut D) -> Result<()> {
    let image1 = base_image();
    let image2 = overlay_image();
    let policy = config.overflow;

    displayer.show("Original Image 1", &image1)?;
    displayer.show("Original Image 2", &image2)?;

    info!("arithmetic with {:?} overflow", policy);
    let sum = add(&image1, &image2, policy).context("sum")?;
    displayer.show("Sum Image", &sum)?;

    let difference = subtract(&image1, &image2, policy).context("subtraction")?;
    displayer.show("Subtracted Image", &difference)?;

    let product = multiply(&image1, &image2, policy).context("product")?;
    displayer.show("Product Image", &product)?;

    let quotient = divide(&image1, &image2).context("division")?;
    displayer.show("Division Image", &quotient)?;

    for transform in &config.transforms {
        let result = transform
            .apply(&image1)
            .with_context(|| format!("{transform:?}"))?;
        displayer.show(transform.title(), &result)?;
    }

    Ok(())
}
