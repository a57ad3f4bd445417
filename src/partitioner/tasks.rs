//! Task extraction

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::extract_files;

/// One unit of work extracted from a task list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Heading text with any ordinal task label stripped
    pub title: String,
    /// Verbatim text block, including the boundary line itself
    pub body: String,
    /// Sorted, duplicate-free file references found in the body
    pub files: Vec<String>,
}

/// Extract ordered tasks from a task-list document.
///
/// Three boundary markers are recognized, checked in this order on each line:
/// level 2-3 headings (`## Task 1: ...`), bold lines (`**Task 1:** ...`) and
/// checkbox items (`- [ ] ...`). The boundary line starts the new task's body,
/// so file references on the title line are kept. Text before the first marker
/// has no task to belong to and is dropped.
pub fn extract_tasks(content: &str) -> Vec<Task> {
    let heading_re = Regex::new(r"^#{2,3}\s+(?:Task\s+\d+[:.]\s*)?(.+)$").unwrap();
    let bold_re = Regex::new(r"^\*\*(?:Task\s+\d+[:.]\s*)?(.+?)\*\*").unwrap();
    let checkbox_re = Regex::new(r"^[-*]\s+\[[ xX]\]\s+(.+)$").unwrap();

    let mut tasks = Vec::new();
    let mut current_title: Option<String> = None;
    let mut current_body: Vec<&str> = Vec::new();

    for line in content.lines() {
        let title = heading_re
            .captures(line)
            .or_else(|| bold_re.captures(line))
            .or_else(|| checkbox_re.captures(line))
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string());

        match title {
            Some(title) => {
                if let Some(prev) = current_title.take() {
                    tasks.push(close_task(prev, &current_body));
                }
                current_title = Some(title);
                current_body = vec![line];
            }
            None => {
                if current_title.is_some() {
                    current_body.push(line);
                }
            }
        }
    }

    if let Some(title) = current_title {
        tasks.push(close_task(title, &current_body));
    }

    tasks
}

fn close_task(title: String, body_lines: &[&str]) -> Task {
    let body = body_lines.join("\n");
    let files = extract_files(&body);
    Task { title, body, files }
}
