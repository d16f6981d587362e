//! `otty-palette` - convert a terminal color palette into the configuration
//! format of a terminal emulator.

mod config;
mod errors;
mod source;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use otty_palette::format;

use crate::config::{PaletteConfig, load_config};
use crate::source::read_palette;

const DEFAULT_FORMAT: &str = "default";

/// Convert a terminal color palette to an emulator configuration file.
///
/// The palette is read as one color per line (`#rrggbb`, `#rgb`,
/// `rgb:rr/gg/bb`, ...) or as JSON, either a list of colors or an object
/// with a `colors` list. The position of a color is its ANSI index.
#[derive(Parser, Debug)]
#[command(name = "otty-palette", version)]
struct Args {
    /// Palette file, `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Output format id (see --list)
    #[arg(short, long)]
    format: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the supported formats and exit
    #[arg(short, long)]
    list: bool,

    /// Config file (defaults to ~/.config/otty/palette.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    if args.list {
        print_formats()?;
        return Ok(());
    }

    let config = load_config(args.config.as_deref())
        .context("failed to load palette config")?;
    let (format_id, output) = resolve(&args, config);

    let descriptor = format::find(&format_id).with_context(|| {
        let ids: Vec<&str> =
            format::list().iter().map(|format| format.id()).collect();
        format!("valid formats: {}", ids.join(", "))
    })?;

    let palette = read_palette(args.input.as_deref())
        .context("failed to read palette")?;
    info!("read {} colors", palette.len());

    let encoded = descriptor.encode(&palette);

    match output {
        Some(path) => {
            fs::write(&path, encoded)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} to {}", descriptor.label(), path.display());
        },
        None => io::stdout()
            .write_all(encoded.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

/// Flags win over the config file, which wins over the built-in defaults.
fn resolve(args: &Args, config: PaletteConfig) -> (String, Option<PathBuf>) {
    let format = args
        .format
        .clone()
        .or(config.format)
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());
    let output = args.output.clone().or(config.output);
    (format, output)
}

fn print_formats() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for descriptor in format::list() {
        writeln!(stdout, "{}\t{}", descriptor.id(), descriptor.label())?;
    }
    Ok(())
}
