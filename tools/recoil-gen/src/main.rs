//! recoil-gen - compile recoil patterns into the firmware header
//!
//! Run from `processing/` with no arguments to regenerate
//! `../arduino_mouse/src/recoil.inc` from `../client/specs.json`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recoil-gen")]
#[command(about = "Compile recoil-pattern JSON into the firmware's recoil.inc header")]
#[command(version)]
struct Cli {
    /// Recoil specs exported by the editor
    #[arg(short, long, global = true, default_value = recoil_gen::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Header to generate
    #[arg(short, long, global = true, default_value = recoil_gen::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header (default)
    Generate,

    /// Check that the header is in sync with the specs
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let stdout = std::io::stdout();
            recoil_gen::generate(&cli.input, &cli.output, &mut stdout.lock())
                .context("Failed to generate recoil header")?;
        }
        Commands::Check => {
            let in_sync = recoil_gen::check(&cli.input, &cli.output)
                .context("Failed to check recoil header")?;
            if !in_sync {
                anyhow::bail!("Header is out of sync. Run 'recoil-gen generate' to regenerate.");
            }
        }
    }

    Ok(())
}
