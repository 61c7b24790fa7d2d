mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Verdict CLI - Grade solutions against task test suites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a solution file against a task definition
    Grade {
        /// Path to the task definition (JSON)
        #[arg(short, long)]
        task: PathBuf,

        /// Path to the solution source file
        #[arg(short, long)]
        solution: PathBuf,
    },

    /// Print a task's description and test count
    Show {
        /// Path to the task definition (JSON)
        #[arg(short, long)]
        task: PathBuf,
    },

    /// Write a sample task definition
    Init {
        /// Directory to write task.json into
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { task, solution } => commands::grade(&task, &solution),
        Commands::Show { task } => commands::show(&task),
        Commands::Init { path } => commands::init(&path),
    }
}
