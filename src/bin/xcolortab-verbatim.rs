// src/bin/xcolortab-verbatim.rs

//! `xcolortab-verbatim`: prints every `rgb.txt` entry in file order with its
//! original spelling, preceded by the `struct xcolor` declaration.

use log::info;
use xcolortab_gen::{GeneratorConfig, NameMode};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = GeneratorConfig::from_args(NameMode::Verbatim, std::env::args().skip(1));
    info!(
        "Generating verbatim table from {}",
        config.input_path.display()
    );

    let rows = xcolortab_gen::run(&config)?;
    info!("Wrote {} colors", rows);
    Ok(())
}
