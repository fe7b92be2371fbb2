use std::env;
use std::path::Path;

use anyhow::Result;
use gridops_demo::{load_config, run_demo, DemoConfig, LogDisplayer, PngDisplayer};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    match &config.output_dir {
        Some(dir) => {
            let png = PngDisplayer::new(dir, config.cell_size)?;
            info!("writing renders to {}", png.dir().display());
            run_demo(&config, &mut (LogDisplayer::new(), png))
        }
        None => run_demo(&config, &mut LogDisplayer::new()),
    }
}
