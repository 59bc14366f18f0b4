use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Topological peak filtering for one-dimensional functions.
#[derive(Parser)]
#[command(
    name = "topf",
    version,
    about = "Topological peak persistence for one-dimensional functions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Replace every sample by its persistence value.
    Transform(TransformArgs),
    /// List peaks ranked by persistence.
    Peaks(PeaksArgs),
}

/// Options shared by all subcommands.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Input text file: one column of values, or `x y` columns.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep only the N most persistent peaks.
    #[arg(short, long)]
    pub n_peaks: Option<usize>,

    /// Report the global maximum as infinitely persistent instead of using
    /// the value range.
    #[arg(long)]
    pub infinite: bool,
}

/// Arguments for the `transform` subcommand.
#[derive(clap::Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output path for `x persistence` rows (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the persistence diagram as JSON to this path.
    #[arg(short, long)]
    pub diagram: Option<PathBuf>,
}

/// Arguments for the `peaks` subcommand.
#[derive(clap::Args)]
pub struct PeaksArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output path for the ranked peak table (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
