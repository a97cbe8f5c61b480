//! Command-line interface for peakcall-config.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **peakcalls**: Parse a peakcall sample sheet and show pairings and groups
//! - **contrasts**: Parse a contrast file, validated against a sample sheet
//!
//! ## Usage
//!
//! ```text
//! # Show ChIP-input pairs and groups
//! peakcall-config peakcalls peakcall.tsv
//!
//! # Validate contrasts against the groups in the sample sheet
//! peakcall-config contrasts peakcall.tsv contrasts.tsv
//!
//! # JSON output for scripting
//! peakcall-config --format json contrasts peakcall.tsv contrasts.tsv
//!
//! # Comma-separated files
//! peakcall-config peakcalls peakcall.csv --delimiter comma
//! ```

use clap::{Parser, Subcommand};

pub mod contrasts;
pub mod peakcalls;

#[derive(Parser)]
#[command(name = "peakcall-config")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Parse and validate peak-calling sample sheets and contrast files")]
#[command(
    long_about = "peakcall-config reads the configuration files that drive a ChIP-seq peak-calling pipeline.\n\nIt checks:\n- ChIP-input pairings and group membership in the peakcall sample sheet\n- That every group named in the contrasts file is defined in the sample sheet"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a peakcall sample sheet
    Peakcalls(peakcalls::PeakcallsArgs),

    /// Parse a contrasts file against a peakcall sample sheet
    Contrasts(contrasts::ContrastsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
