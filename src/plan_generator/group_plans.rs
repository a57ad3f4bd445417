//! Group plan file generator
//!
//! Writes one markdown file per group plus an index, ready to hand to
//! parallel worker instances.

use crate::partitioner::{PartitionResult, TaskGroup};
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Group plan generator
#[derive(Default)]
pub struct GroupPlanGenerator;

impl GroupPlanGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate plan files from a partition result
    pub fn generate(&self, result: &PartitionResult, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)?;

        self.generate_index(result, output_dir)?;

        for group in &result.groups {
            self.generate_group_file(group, output_dir)?;
        }

        Ok(())
    }

    fn generate_index(&self, result: &PartitionResult, output_dir: &Path) -> Result<()> {
        let mut content = String::new();

        content.push_str("# Task Group Index\n\n");
        content.push_str(&format!(
            "**Generated:** {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(ref error) = result.error {
            content.push_str(&format!("**{}**\n", error));
            fs::write(output_dir.join("index.md"), content)?;
            return Ok(());
        }

        content.push_str("## How to Use\n\n");
        content.push_str("1. Assign each group file to its own worker instance\n");
        content.push_str("2. Groups own disjoint file sets, so they can run simultaneously\n");
        content.push_str("3. Tasks inside one group may touch the same files; run them in order\n\n");

        content.push_str("## Groups\n\n");
        content.push_str("| Group | Tasks | Files |\n");
        content.push_str("|-------|-------|-------|\n");
        for group in &result.groups {
            content.push_str(&format!(
                "| [Group {}](./group-{:02}.md) | {} | {} |\n",
                group.id,
                group.id,
                group.tasks.len(),
                group.files.len()
            ));
        }
        content.push('\n');

        if !result.ungrouped.is_empty() {
            content.push_str("## Ungrouped Tasks\n\n");
            content.push_str("These tasks reference no files and can go to any idle worker:\n\n");
            for title in &result.ungrouped {
                content.push_str(&format!("- [ ] {}\n", title));
            }
            content.push('\n');
        }

        content.push_str("---\n\n");
        content.push_str("## Usage Example\n\n");
        content.push_str("```bash\n");
        content.push_str("# Terminal 1\n");
        content.push_str("claude \"Implement the tasks in group-01.md, in order\"\n\n");
        content.push_str("# Terminal 2 - runs in parallel\n");
        content.push_str("claude \"Implement the tasks in group-02.md, in order\"\n");
        content.push_str("```\n");

        fs::write(output_dir.join("index.md"), content)?;
        Ok(())
    }

    fn generate_group_file(&self, group: &TaskGroup, output_dir: &Path) -> Result<()> {
        let mut content = String::new();

        content.push_str(&format!("# Group {}\n\n", group.id));

        content.push_str("## Files Owned\n\n");
        content.push_str("No other group touches these files while this group runs.\n\n");
        for file in &group.files {
            content.push_str(&format!("- `{}`\n", file));
        }
        content.push('\n');

        content.push_str("## Tasks\n\n");
        content.push_str("Run in listed order; tasks in one group may conflict with each other.\n\n");
        for title in &group.tasks {
            content.push_str(&format!("- [ ] {}\n", title));
        }
        content.push('\n');

        content.push_str("---\n\n");
        content.push_str("## Worker Instructions\n\n");
        content.push_str("When working on this group:\n\n");
        content.push_str("1. Work through the tasks top to bottom\n");
        content.push_str("2. Stay inside the files listed above\n");
        content.push_str("3. Run the relevant tests after each task\n");
        content.push_str("4. Commit after each completed task\n");

        fs::write(output_dir.join(format!("group-{:02}.md", group.id)), content)?;
        Ok(())
    }
}
