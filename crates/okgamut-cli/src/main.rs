//! okgamut - Oklab color conversion and gamut mapping CLI
//!
//! Converts device colors between sRGB and Display P3 through Oklab, and
//! applies Oklab-space manipulations with CSS Color 4 gamut mapping.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use commands::adjust::Direction;
use okgamut_color::{GamutId, MappingMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "okgamut")]
#[command(author, version, about = "Oklab color conversion and gamut mapping")]
#[command(long_about = "
Converts 8-bit device colors between sRGB and Display P3 through Oklab.
Colors outside the target gamut are mapped with the CSS Color 4 algorithm
(lightness and hue kept, chroma reduced) unless another mode is selected.

Colors are given as three numbers, or one quoted string per color:
  okgamut convert --from p3 --to srgb 255 0 0
  okgamut convert --from p3 --to srgb \"255,0,0\" \"0 255 0\"

Examples:
  okgamut convert --from p3 --to srgb 255 0 0            # sRGB(255, 11, 12)
  okgamut convert --from p3 --to srgb --mapping none 255 0 0
  okgamut oklab --gamut srgb 255 128 0
  okgamut interpolate --steps 5 \"255 0 0\" \"0 0 255\"
  okgamut darken --amount 0.2 200 80 40
  okgamut --json lighten --gamut p3 --amount 0.5 0 128 255

Logging follows RUST_LOG (default okgamut=warn, okgamut=debug with -v).
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert colors from one gamut to another
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show the Oklab and Oklch coordinates of colors
    #[command(visible_alias = "lab")]
    Oklab(OklabArgs),

    /// Interpolate between two colors in Oklab
    #[command(visible_alias = "mix")]
    Interpolate(InterpolateArgs),

    /// Reduce Oklch lightness
    Darken(AdjustArgs),

    /// Increase Oklch lightness
    Lighten(AdjustArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source gamut (srgb, p3)
    #[arg(short, long, default_value = "p3")]
    from: GamutId,

    /// Target gamut (srgb, p3)
    #[arg(short, long, default_value = "srgb")]
    to: GamutId,

    /// Out-of-gamut handling (css4, clip, none)
    #[arg(short, long, default_value = "css4")]
    mapping: MappingMode,

    /// Compute in single precision (f32)
    #[arg(long)]
    single: bool,

    /// Colors: "R G B" / "R,G,B" strings, or bare channel values in groups of three
    #[arg(required = true, allow_negative_numbers = true)]
    colors: Vec<String>,
}

#[derive(Args)]
struct OklabArgs {
    /// Gamut of the input colors (srgb, p3)
    #[arg(short, long, default_value = "srgb")]
    gamut: GamutId,

    /// Colors: "R G B" / "R,G,B" strings, or bare channel values in groups of three
    #[arg(required = true, allow_negative_numbers = true)]
    colors: Vec<String>,
}

#[derive(Args)]
struct InterpolateArgs {
    /// Gamut of the colors (srgb, p3)
    #[arg(short, long, default_value = "srgb")]
    gamut: GamutId,

    /// Number of samples from start to end, both included
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u32).range(2..))]
    steps: u32,

    /// Sample a single position instead (may lie outside 0..1)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "steps")]
    at: Option<f64>,

    /// Start color ("R G B" or "R,G,B")
    start: String,

    /// End color ("R G B" or "R,G,B")
    end: String,
}

#[derive(Args)]
struct AdjustArgs {
    /// Gamut of the color (srgb, p3)
    #[arg(short, long, default_value = "srgb")]
    gamut: GamutId,

    /// Strength, 0 (no change) to 1 (black / white)
    #[arg(short, long, default_value = "0.1")]
    amount: f64,

    /// Colors: "R G B" / "R,G,B" strings, or bare channel values in groups of three
    #[arg(required = true, allow_negative_numbers = true)]
    colors: Vec<String>,
}

/// Installs the tracing subscriber: RUST_LOG if set, otherwise by verbosity.
fn init_logging(verbose: bool) {
    let default = if verbose { "okgamut=debug" } else { "okgamut=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
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

    let out = commands::Output::new(cli.json);
    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &out),
        Commands::Oklab(args) => commands::oklab::run(args, &out),
        Commands::Interpolate(args) => commands::interpolate::run(args, &out),
        Commands::Darken(args) => commands::adjust::run(args, Direction::Darken, &out),
        Commands::Lighten(args) => commands::adjust::run(args, Direction::Lighten, &out),
    }
}
