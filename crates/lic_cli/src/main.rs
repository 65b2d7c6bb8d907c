//! Decision CLI
//!
//! Walks a JSON input record (or a directory of them), runs the decision
//! core once per record, persists the output records and renders the HTML
//! report over them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod report;
mod runner;

#[derive(Parser)]
#[command(name = "lic_cli")]
#[command(about = "Evaluate launch-interceptor condition input records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one input file, or every *.json file in a directory
    Run {
        /// Input record or directory of input records
        #[arg(long)]
        input: PathBuf,

        /// Directory to write serialized output records into
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render the HTML report from a directory of output records
    Report {
        /// Directory holding the output records
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output } => runner::run(&input, output.as_deref()),
        Commands::Report { output } => report::render(&output),
    }
}
