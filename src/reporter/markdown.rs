//! Markdown report generator

use crate::partitioner::PartitionResult;
use crate::reporter::Reporter;
use anyhow::Result;

pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn generate(result: &PartitionResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Task Partition Report\n\n");

        if let Some(ref error) = result.error {
            output.push_str(&format!("**{}**\n", error));
            return Ok(output);
        }

        let total_tasks: usize =
            result.groups.iter().map(|g| g.tasks.len()).sum::<usize>() + result.ungrouped.len();

        // Summary Section
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Parallelizable | {} |\n",
            if result.parallelizable { "yes" } else { "no" }
        ));
        output.push_str(&format!("| Tasks | {} |\n", total_tasks));
        output.push_str(&format!("| Groups | {} |\n", result.groups.len()));
        output.push_str(&format!("| Ungrouped Tasks | {} |\n", result.ungrouped.len()));
        output.push('\n');

        // One section per group
        for group in &result.groups {
            output.push_str(&format!("## Group {}\n\n", group.id));

            output.push_str("### Tasks\n\n");
            for title in &group.tasks {
                output.push_str(&format!("- [ ] {}\n", title));
            }
            output.push('\n');

            output.push_str("### Files\n\n");
            for file in &group.files {
                output.push_str(&format!("- `{}`\n", file));
            }
            output.push('\n');
        }

        if !result.ungrouped.is_empty() {
            output.push_str("## Ungrouped Tasks\n\n");
            output.push_str("No file references detected; safe to run alongside any group.\n\n");
            for title in &result.ungrouped {
                output.push_str(&format!("- [ ] {}\n", title));
            }
            output.push('\n');
        }

        output.push_str("---\n\n");
        output.push_str("*Generated by task-partition*\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::TaskPartitioner;

    #[test]
    fn test_report_sections() {
        let result = TaskPartitioner::new(3)
            .unwrap()
            .partition("## Task 1: A\n`x.rs`\n\n## Task 2: B\n`y.rs`\n");
        let report = MarkdownReporter::generate(&result).unwrap();
        assert!(report.contains("## Summary"));
        assert!(report.contains("## Group 1"));
        assert!(report.contains("## Group 2"));
        assert!(report.contains("- `x.rs`"));
    }

    #[test]
    fn test_report_carries_no_tasks_note() {
        let result = TaskPartitioner::new(3).unwrap().partition("");
        let report = MarkdownReporter::generate(&result).unwrap();
        assert!(report.contains("No tasks found"));
    }
}
