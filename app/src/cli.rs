//! Command-line interface for lesscolors
//!
//! Loads an input image and a palette image, replaces every input pixel
//! with the closest palette color, and writes the result. Prints a JSON
//! report to stdout for programmatic use and a human summary to stderr.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use lesscolors::{reduce_image_colors, ColorSpace, OutputFormat, RemapConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lesscolors",
    version,
    about = "Reduce image colors to the closest matches from a palette image",
    long_about = None
)]
pub struct Args {
    /// Path to the input image
    #[arg(long = "input", short = 'i', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// The output image path
    #[arg(long = "output", short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Path to the color palette image
    #[arg(
        long = "palette",
        short = 'p',
        visible_alias = "lut",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub palette: PathBuf,

    /// File format of the output image (defaults to the output extension, then png)
    #[arg(long = "output-type", value_name = "FORMAT")]
    pub output_type: Option<String>,

    /// Color space used for closest-color matching: srgb, lab, oklab or xyz
    #[arg(long = "color-space", value_name = "SPACE")]
    pub color_space: Option<ColorSpace>,

    /// Read settings from a JSON config file (flags override file values)
    #[arg(long = "config", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Suppress the human-readable summary on stderr
    #[arg(long = "quiet", short = 'q', action = ArgAction::SetTrue)]
    pub quiet: bool,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if argument validation or processing fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    let started = Instant::now();

    if !args.input.exists() {
        bail!("couldn't find file: {}", args.input.display());
    }
    if !args.palette.exists() {
        bail!("couldn't find file: {}", args.palette.display());
    }

    let config = build_config(&args)?;

    let report = match reduce_image_colors(&args.input, &args.palette, &args.output, &config) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Processing failed: {error}");
            eprintln!("Suggestion: {}", error.user_message());
            std::process::exit(1);
        }
    };

    // JSON to stdout for programmatic use
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !args.quiet {
        eprintln!();
        eprintln!("Color reduction summary:");
        eprintln!(
            "  Input:          {} ({}x{})",
            args.input.display(),
            report.width,
            report.height
        );
        eprintln!("  Output:         {}", args.output.display());
        eprintln!("  Palette size:   {} colors", report.palette_size);
        eprintln!("  Pixels changed: {}", report.pixels_changed);
        eprintln!("  Distance space: {}", report.distance_space);
        eprintln!(
            "Successfully finished in {} ms.",
            started.elapsed().as_millis()
        );
    }

    Ok(())
}

/// Merge the config file (if any) with command-line flags; flags win.
fn build_config(args: &Args) -> Result<RemapConfig> {
    let mut config = match &args.config {
        Some(path) => RemapConfig::from_json_file(path)
            .with_context(|| format!("couldn't load config file {}", path.display()))?,
        None => RemapConfig::default(),
    };

    if let Some(space) = args.color_space {
        config.distance_space = space;
    }
    if let Some(name) = &args.output_type {
        config.output_format = Some(OutputFormat::from_name(name)?);
    }

    Ok(config)
}
