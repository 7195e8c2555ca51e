//! hueshift - recolor images by shifting hue, saturation and value
//!
//! Thin front end over `hueshift-ops`: computes shift parameters, shifts
//! individual colors and recolors the bundled sample swatch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hueshift_core::Color;
use hueshift_ops::DEFAULT_REFERENCE;

mod commands;

#[derive(Parser)]
#[command(name = "hueshift")]
#[command(author, version, about = "Shift colors relative to a reference color in HSV space")]
#[command(long_about = "
Learns a hue rotation and saturation/value scales that map a reference color
onto a target color, then applies the same shift to other colors.

Examples:
  hueshift params '#0000FF'                       # Show shift parameters
  hueshift shift '#0000FF' '#F37502' '#FE9800'    # Shift individual colors
  hueshift --reference '#3366CC' shift '#CC3366' '#3366CC'
  hueshift sample '#00A000'                       # Recolor the sample swatch
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Reference color the shift is measured from (#RRGGBB)
    #[arg(short, long, global = true, default_value_t = DEFAULT_REFERENCE)]
    reference: Color,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shift parameters for a target color
    #[command(visible_alias = "p")]
    Params(commands::params::ParamsArgs),

    /// Shift individual colors
    #[command(visible_alias = "s")]
    Shift(commands::shift::ShiftArgs),

    /// Recolor the bundled 4x4 sample swatch
    Sample(commands::sample::SampleArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Params(args) => commands::params::run(args, cli.reference),
        Commands::Shift(args) => commands::shift::run(args, cli.reference),
        Commands::Sample(args) => commands::sample::run(args, cli.reference),
    }
}
