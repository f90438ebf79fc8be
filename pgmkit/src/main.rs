//! pgmkit - neighborhood filters for PGM grayscale images
//!
//! Each invocation runs one filter command start to finish: read the
//! input file, run the pipeline in memory, write the output file. The
//! output file is only written after the whole pipeline succeeded, so a
//! failing command never leaves a partial result behind.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pgmkit_filter::{EdgeOrientation, FilterSpec, apply_filter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output path used when the command omits one.
const DEFAULT_OUTPUT: &str = "output.pgm";

/// Apply neighborhood filters to PGM grayscale images.
///
/// Both P2 (ASCII) and P5 (binary) inputs are supported; the output is
/// written in the input's original sub-format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Smooth with the arithmetic mean over each kernel window
    Average {
        /// Kernel size (odd, at least 1)
        kernel_size: u32,
        /// Input PGM file
        input: PathBuf,
        /// Output PGM file [default: output.pgm]
        output: Option<PathBuf>,
    },
    /// Smooth with the median over each kernel window
    Median {
        /// Kernel size (odd, at least 1)
        kernel_size: u32,
        /// Input PGM file
        input: PathBuf,
        /// Output PGM file [default: output.pgm]
        output: Option<PathBuf>,
    },
    /// Detect edges with the built-in 3x3 Sobel kernel; the output
    /// shrinks by the kernel margin
    Sobel {
        /// Edge orientation to respond to
        #[arg(short, long, value_enum, default_value_t = Orientation::Vertical)]
        orientation: Orientation,
        /// Input PGM file
        input: PathBuf,
        /// Output PGM file [default: output.pgm]
        output: Option<PathBuf>,
    },
}

/// CLI-facing edge orientation, mapped onto the engine's enum.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Orientation {
    /// Respond to vertical edges
    Vertical,
    /// Respond to horizontal edges
    Horizontal,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

impl From<Orientation> for EdgeOrientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => EdgeOrientation::Vertical,
            Orientation::Horizontal => EdgeOrientation::Horizontal,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let (name, spec, input, output) = match args.command {
        Command::Average {
            kernel_size,
            input,
            output,
        } => ("average", FilterSpec::average(kernel_size), input, output),
        Command::Median {
            kernel_size,
            input,
            output,
        } => ("median", FilterSpec::median(kernel_size), input, output),
        Command::Sobel {
            orientation,
            input,
            output,
        } => ("sobel", FilterSpec::sobel(orientation.into()), input, output),
    };
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    run(name, &spec, &input, &output)
}

fn run(name: &str, spec: &FilterSpec, input: &Path, output: &Path) -> anyhow::Result<()> {
    let data =
        fs::read(input).with_context(|| format!("cannot read input file {}", input.display()))?;

    let result = apply_filter(&data, spec)
        .with_context(|| format!("{name} filter failed on {}", input.display()))?;

    fs::write(output, result)
        .with_context(|| format!("cannot write output file {}", output.display()))?;

    info!(filter = name, input = %input.display(), output = %output.display(), "filter applied");
    println!(
        "-> {name} filter applied to {} and result saved to {}",
        input.display(),
        output.display()
    );
    Ok(())
}
