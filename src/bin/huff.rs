//! Command line front-end for the codec.
//!
//! Reads the whole input file into memory, runs a single encode or decode
//! pass and writes the result out. File handling and error reporting live
//! here; the library itself never touches the filesystem.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing::info;

#[derive(Parser)]
#[command(name = "huff", version, about = "Huffman compression for single files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Print debug output while working
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a Huffman artifact
    Compress {
        input: PathBuf,
        output: PathBuf,
    },
    /// Restore the original file from a Huffman artifact
    Decompress {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match cli.command {
        Command::Compress { input, output } => {
            let data = fs::read(&input)
                .wrap_err_with(|| format!("failed to read {}", input.display()))?;
            let artifact = ruhuff::encode(&data)?;
            fs::write(&output, &artifact)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
            info!(
                input_bytes = data.len(),
                output_bytes = artifact.len(),
                "compressed {} -> {}",
                input.display(),
                output.display()
            );
        }
        Command::Decompress { input, output } => {
            let artifact = fs::read(&input)
                .wrap_err_with(|| format!("failed to read {}", input.display()))?;
            let data = ruhuff::decode(&artifact)?;
            fs::write(&output, &data)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
            info!(
                input_bytes = artifact.len(),
                output_bytes = data.len(),
                "decompressed {} -> {}",
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}
