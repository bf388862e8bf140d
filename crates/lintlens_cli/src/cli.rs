//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lintlens_core::{OutputFormat, View};

/// LintLens - Summary and detail reports for textlint results
#[derive(Parser)]
#[command(name = "lintlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report textlint JSON results
    Report {
        /// textlint `--format json` output ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Views to print (all, summary, detail)
        #[arg(long)]
        view: Option<View>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Highlight the detail entry at this index
        #[arg(long, value_name = "INDEX")]
        select: Option<usize>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
