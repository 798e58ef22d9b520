use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ACE bridge CLI - Computes atomic cluster expansion (ACE) descriptors for atomic structures by orchestrating an external Julia engine.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ACE descriptors for the structures in an extended-XYZ file.
    Compute(ComputeArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    // --- Core Arguments ---
    /// Path to the input structure file (extended XYZ, one or more frames).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Engine Overrides ---
    /// Override the engine script from the config file.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Override the interpreter program that runs the engine script.
    #[arg(long, value_name = "PATH")]
    pub program: Option<PathBuf>,

    // --- Basis Overrides ---
    /// Override the cutoff radius of the atomic environment in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub rcut: Option<f64>,

    /// Override the correlation order of the expansion.
    #[arg(long, value_name = "INT")]
    pub order: Option<u32>,

    /// Override the total polynomial degree of the basis.
    #[arg(long, value_name = "INT")]
    pub total_degree: Option<u32>,

    // --- Buffer Overrides ---
    /// Override the staging directory shared with the engine process.
    #[arg(short, long, value_name = "PATH")]
    pub buffer_dir: Option<PathBuf>,

    /// Override the artifact file name inside the buffer directory.
    #[arg(long, value_name = "NAME")]
    pub output_name: Option<String>,

    /// Reload a previously computed artifact instead of recomputing.
    #[arg(long)]
    pub reuse_buffer: bool,
}
