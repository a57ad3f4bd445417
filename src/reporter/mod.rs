//! Report generation module
//!
//! Renders partition results in various formats.

mod json;
mod markdown;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use crate::partitioner::PartitionResult;
use anyhow::Result;

/// Trait for report generators
pub trait Reporter {
    fn generate(result: &PartitionResult) -> Result<String>;
}
