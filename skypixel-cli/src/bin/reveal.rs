//! Binary for the `reveal` tool: decode the scrambled 100x100 image and
//! raster it to the terminal.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use skypixel_cli::render;
use skypixel_core::{RevealError, reveal};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "reveal", version, about = "Decode and display a scrambled image")]
struct Cli {
    /// Path to the encoded NPY array file.
    #[arg(default_value = "encoded_array.npy")]
    path: PathBuf,
}

fn main() -> ExitCode {
    skypixel_cli::init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RevealError> {
    let image = reveal::reveal(&cli.path)?;
    print!("{}", render::render_to_string(&image));
    Ok(())
}
