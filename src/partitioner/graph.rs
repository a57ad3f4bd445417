//! Conflict graph construction and component discovery

use std::collections::{BTreeSet, HashMap};

use super::Task;

/// Map each referenced file to the indices of the tasks that touch it.
///
/// This mapping is the adjacency structure of the conflict graph: two tasks
/// are in conflict iff some file maps to both of them. No separate edge list
/// is ever materialized.
pub fn build_file_graph(tasks: &[Task]) -> HashMap<String, Vec<usize>> {
    let mut file_to_tasks: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, task) in tasks.iter().enumerate() {
        for file in &task.files {
            file_to_tasks.entry(file.clone()).or_default().push(i);
        }
    }
    file_to_tasks
}

/// Find connected components of file-bearing tasks.
///
/// A component is the transitive closure of "shares a file with". Tasks
/// without file references are left out entirely; the caller reports them
/// as independently runnable. Components are sets of task indices, so
/// membership does not depend on traversal order.
pub fn find_connected_components(
    tasks: &[Task],
    file_to_tasks: &HashMap<String, Vec<usize>>,
) -> Vec<BTreeSet<usize>> {
    let mut visited = vec![false; tasks.len()];
    let mut components = Vec::new();

    for start in 0..tasks.len() {
        if visited[start] || tasks[start].files.is_empty() {
            continue;
        }

        let mut component = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            component.insert(node);

            for file in &tasks[node].files {
                if let Some(neighbors) = file_to_tasks.get(file) {
                    for &neighbor in neighbors {
                        if !visited[neighbor] {
                            stack.push(neighbor);
                        }
                    }
                }
            }
        }

        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, files: &[&str]) -> Task {
        Task {
            title: title.to_string(),
            body: String::new(),
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_file_graph_maps_files_to_task_indices() {
        let tasks = vec![task("a", &["x.rs"]), task("b", &["x.rs", "y.rs"])];
        let graph = build_file_graph(&tasks);
        assert_eq!(graph["x.rs"], vec![0, 1]);
        assert_eq!(graph["y.rs"], vec![1]);
    }

    #[test]
    fn test_disjoint_tasks_form_separate_components() {
        let tasks = vec![task("a", &["x.rs"]), task("b", &["y.rs"])];
        let graph = build_file_graph(&tasks);
        let components = find_connected_components(&tasks, &graph);
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn test_transitive_sharing_joins_components() {
        let tasks = vec![
            task("a", &["x.rs"]),
            task("b", &["x.rs", "y.rs"]),
            task("c", &["y.rs"]),
        ];
        let graph = build_file_graph(&tasks);
        let components = find_connected_components(&tasks, &graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0], BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_tasks_without_files_are_excluded() {
        let tasks = vec![task("a", &[]), task("b", &["x.rs"])];
        let graph = build_file_graph(&tasks);
        let components = find_connected_components(&tasks, &graph);
        assert_eq!(components.len(), 1);
        assert!(!components[0].contains(&0));
        assert!(components[0].contains(&1));
    }
}
