//! File reference extraction

use regex::Regex;
use std::collections::BTreeSet;

/// Extensions accepted for bare (unquoted) path tokens.
const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "py", "rb", "go", "rs", "java", "sql", "css", "scss", "html", "vue",
    "svelte",
];

/// Longest string the shape filter accepts as a path.
const MAX_PATH_LEN: usize = 200;

/// Extract file references from task body text.
///
/// Two patterns are scanned: backtick-quoted spans ending in a dot plus a
/// short alphabetic suffix (`` `src/auth.ts` ``), and bare tokens of path
/// characters ending in a recognized source extension. Both are heuristics,
/// not a markdown parser; prose that happens to look like a path will match,
/// which is acceptable for grouping purposes.
pub fn extract_files(text: &str) -> Vec<String> {
    let mut files = BTreeSet::new();

    let backtick_re = Regex::new(r"`([^`]+\.[a-zA-Z]{1,10})`").unwrap();
    for cap in backtick_re.captures_iter(text) {
        let path = &cap[1];
        if looks_like_file(path) {
            files.insert(path.to_string());
        }
    }

    let bare_re = Regex::new(&format!(
        r"(?:^|\s)((?:[\w./\-]+/)?[\w.\-]+\.(?:{}))\b",
        RECOGNIZED_EXTENSIONS.join("|")
    ))
    .unwrap();
    for cap in bare_re.captures_iter(text) {
        let path = &cap[1];
        if looks_like_file(path) {
            files.insert(path.to_string());
        }
    }

    files.into_iter().collect()
}

/// Shape filter: does this string plausibly name a file?
fn looks_like_file(path: &str) -> bool {
    if path.is_empty() || path.len() > MAX_PATH_LEN {
        return false;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return false;
    }
    if path.contains(' ') {
        return false;
    }
    // The last path segment must carry an extension
    path.split('/').last().unwrap_or(path).contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_paths() {
        let files = extract_files("Edit `src/auth.ts` and `docs/notes.txt`.");
        assert_eq!(files, vec!["docs/notes.txt", "src/auth.ts"]);
    }

    #[test]
    fn test_bare_paths_need_recognized_extension() {
        let files = extract_files("Touch src/app.py and also notes.txt plus build/main.rs");
        assert_eq!(files, vec!["build/main.rs", "src/app.py"]);
    }

    #[test]
    fn test_urls_are_not_files() {
        let files = extract_files("See `https://example.com/page.html` for context");
        assert!(files.is_empty());
    }

    #[test]
    fn test_paths_with_spaces_rejected() {
        let files = extract_files("`my file.ts`");
        assert!(files.is_empty());
    }

    #[test]
    fn test_overlong_paths_rejected() {
        let files = extract_files(&format!("`{}name.ts`", "dir/".repeat(60)));
        assert!(files.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        let files = extract_files("`b.rs` then a.rs then `a.rs` again");
        assert_eq!(files, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_shape_filter() {
        assert!(looks_like_file("src/main.rs"));
        assert!(looks_like_file("main.rs"));
        assert!(!looks_like_file(""));
        assert!(!looks_like_file("http://host/x.rs"));
        assert!(!looks_like_file("my file.ts"));
        assert!(!looks_like_file("src/Makefile"));
    }

    #[test]
    fn test_no_references_in_plain_prose() {
        let files = extract_files("Investigate the flaky login flow. Ask around first.");
        assert!(files.is_empty());
    }
}
