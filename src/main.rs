// src/main.rs

//! `xcolortab-gen`: prints the normalized, sorted `xcolortab[]` table.
//!
//! Usage: `xcolortab-gen [--filter] > xcolortab.h`

use log::info;
use xcolortab_gen::{GeneratorConfig, NameMode};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the generated source.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = GeneratorConfig::from_args(NameMode::Normalize, std::env::args().skip(1));
    info!(
        "Generating normalized table from {} (filter: {})",
        config.input_path.display(),
        config.filter
    );

    let rows = xcolortab_gen::run(&config)?;
    info!("Wrote {} colors", rows);
    Ok(())
}
