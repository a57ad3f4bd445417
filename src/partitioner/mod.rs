//! Task partitioning module
//!
//! Groups tasks by file ownership using connected-component analysis: tasks
//! that share any target file land in the same group, and groups never share
//! a file, so downstream workers can run one group each in parallel.

mod files;
mod graph;
mod tasks;

pub use files::*;
pub use graph::*;
pub use tasks::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// A set of tasks that must run on the same worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGroup {
    /// Group identifier, numbered from 1 in descending size order
    pub id: usize,
    /// Titles of member tasks, in the order they were parsed
    pub tasks: Vec<String>,
    /// Sorted union of files referenced by the member tasks
    pub files: Vec<String>,
}

/// Result of one partition run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Whether any parallelism is possible
    pub parallelizable: bool,
    /// Work groups with pairwise-disjoint file sets
    pub groups: Vec<TaskGroup>,
    /// Titles of tasks with no file references, runnable alongside anything
    pub ungrouped: Vec<String>,
    /// Set when the input contained no extractable tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PartitionResult {
    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str("🗂  Task Partition Summary\n");
        output.push_str("========================\n\n");

        if let Some(ref error) = self.error {
            output.push_str(&format!("⚠️  {}\n", error));
            return output;
        }

        let total_tasks: usize =
            self.groups.iter().map(|g| g.tasks.len()).sum::<usize>() + self.ungrouped.len();

        output.push_str(&format!("📋 Tasks: {}\n", total_tasks));
        output.push_str(&format!(
            "🔀 Parallelizable: {}\n\n",
            if self.parallelizable { "yes" } else { "no" }
        ));

        for group in &self.groups {
            output.push_str(&format!(
                "Group {}: {} tasks, {} files\n",
                group.id,
                group.tasks.len(),
                group.files.len()
            ));
            for title in &group.tasks {
                output.push_str(&format!("   - {}\n", title));
            }
        }

        if !self.ungrouped.is_empty() {
            output.push_str(&format!(
                "\n🕊  Ungrouped ({} tasks, no file references):\n",
                self.ungrouped.len()
            ));
            for title in &self.ungrouped {
                output.push_str(&format!("   - {}\n", title));
            }
        }

        output
    }
}

/// Configuration errors, reported before any parsing work
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("max groups must be at least 1, got {0}")]
    InvalidMaxGroups(usize),
}

/// Task partitioner
pub struct TaskPartitioner {
    max_groups: usize,
}

impl TaskPartitioner {
    /// Create a partitioner with a group limit (must be >= 1)
    pub fn new(max_groups: usize) -> Result<Self, PartitionError> {
        if max_groups < 1 {
            return Err(PartitionError::InvalidMaxGroups(max_groups));
        }
        Ok(Self { max_groups })
    }

    /// Run the full pipeline on a task-list document
    pub fn partition(&self, content: &str) -> PartitionResult {
        let tasks = extract_tasks(content);
        self.partition_tasks(&tasks)
    }

    /// Partition already-extracted tasks into balanced groups
    pub fn partition_tasks(&self, tasks: &[Task]) -> PartitionResult {
        if tasks.is_empty() {
            return PartitionResult {
                parallelizable: false,
                groups: Vec::new(),
                ungrouped: Vec::new(),
                error: Some("No tasks found in input".to_string()),
            };
        }

        let file_graph = build_file_graph(tasks);
        let mut components = find_connected_components(tasks, &file_graph);

        let grouped: BTreeSet<usize> = components.iter().flatten().copied().collect();
        let ungrouped: Vec<String> = tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| !grouped.contains(i))
            .map(|(_, t)| t.title.clone())
            .collect();

        // Everything hangs together through shared files: nothing to parallelize
        if components.len() <= 1 && ungrouped.is_empty() {
            let all_files: BTreeSet<&str> = tasks
                .iter()
                .flat_map(|t| t.files.iter().map(String::as_str))
                .collect();
            return PartitionResult {
                parallelizable: false,
                groups: vec![TaskGroup {
                    id: 1,
                    tasks: tasks.iter().map(|t| t.title.clone()).collect(),
                    files: all_files.into_iter().map(String::from).collect(),
                }],
                ungrouped: Vec::new(),
                error: None,
            };
        }

        // Largest first; the sort is stable, so equal sizes keep discovery order
        components.sort_by(|a, b| b.len().cmp(&a.len()));

        // Greedy smallest-pair merge until the group limit holds
        while components.len() > self.max_groups {
            let merged: BTreeSet<usize> = match (components.pop(), components.pop()) {
                (Some(a), Some(b)) => a.union(&b).copied().collect(),
                _ => break,
            };
            components.push(merged);
            components.sort_by(|a, b| b.len().cmp(&a.len()));
        }

        let groups: Vec<TaskGroup> = components
            .iter()
            .enumerate()
            .map(|(idx, comp)| {
                let titles = comp.iter().map(|&i| tasks[i].title.clone()).collect();
                let group_files: BTreeSet<&str> = comp
                    .iter()
                    .flat_map(|&i| tasks[i].files.iter().map(String::as_str))
                    .collect();
                TaskGroup {
                    id: idx + 1,
                    tasks: titles,
                    files: group_files.into_iter().map(String::from).collect(),
                }
            })
            .collect();

        PartitionResult {
            parallelizable: groups.len() > 1 || !ungrouped.is_empty(),
            groups,
            ungrouped,
            error: None,
        }
    }
}
