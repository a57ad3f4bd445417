//! Task Partition CLI Tool
//!
//! Reads a markdown task list and partitions the tasks into file-disjoint
//! groups that can be implemented in parallel.

mod partitioner;
mod plan_generator;
mod reporter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use partitioner::{PartitionResult, TaskPartitioner};
use plan_generator::GroupPlanGenerator;
use reporter::{JsonReporter, MarkdownReporter, Reporter};

#[derive(Parser)]
#[command(name = "task-partition")]
#[command(version = "0.1.0")]
#[command(about = "Partition a task list into groups for parallel implementation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition tasks and print the result
    Partition {
        /// Path to the task list (markdown)
        #[arg(short, long)]
        path: PathBuf,

        /// Maximum number of task groups
        #[arg(long, default_value = "3")]
        max_groups: usize,

        /// Output format (json, markdown)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write dispatch-ready plan files, one per group
    Plan {
        /// Path to the task list (markdown)
        #[arg(short, long)]
        path: PathBuf,

        /// Maximum number of task groups
        #[arg(long, default_value = "3")]
        max_groups: usize,

        /// Output directory for plan files
        #[arg(short, long, default_value = ".claude/plan")]
        output_dir: PathBuf,
    },

    /// Quick summary of the partition
    Summary {
        /// Path to the task list (markdown)
        #[arg(short, long)]
        path: PathBuf,

        /// Maximum number of task groups
        #[arg(long, default_value = "3")]
        max_groups: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Partition {
            path,
            max_groups,
            format,
            output,
        } => {
            let result = run_partition(&path, max_groups)?;

            let report = match format.as_str() {
                "markdown" => MarkdownReporter::generate(&result)?,
                _ => JsonReporter::generate(&result)?,
            };

            match output {
                Some(path) => std::fs::write(path, report)?,
                None => println!("{}", report),
            }
        }

        Commands::Plan {
            path,
            max_groups,
            output_dir,
        } => {
            let result = run_partition(&path, max_groups)?;

            let generator = GroupPlanGenerator::new();
            generator.generate(&result, &output_dir)?;

            println!("Group plans written to: {}", output_dir.display());
        }

        Commands::Summary { path, max_groups } => {
            let result = run_partition(&path, max_groups)?;

            println!("{}", result.summary());
        }
    }

    Ok(())
}

fn run_partition(path: &Path, max_groups: usize) -> Result<PartitionResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read task list: {}", path.display()))?;

    let partitioner = TaskPartitioner::new(max_groups)?;
    Ok(partitioner.partition(&content))
}
