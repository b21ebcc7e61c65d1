use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result};
use blocklayout::Layout;
use clap::Parser;
use log::info;

mod config;

use config::Config;

/// Serializes `layout` into `writer` followed by a newline.
fn emit<W: Write>(layout: &Layout, mut writer: W, pretty: bool) -> Result<()> {
    if pretty {
        layout.write_json_pretty(&mut writer)?;
    } else {
        layout.write_json(&mut writer)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    let layout_config = config.layout_config();

    // Generate in full before touching any output, so a bad configuration emits nothing.
    let layout = Layout::generate(&layout_config).context("Failed to generate layout")?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            emit(&layout, BufWriter::new(file), config.pretty)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} LEDs to {}", layout.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            emit(&layout, BufWriter::new(stdout.lock()), config.pretty)
                .context("Failed to write layout to stdout")?;
        }
    }

    Ok(())
}
