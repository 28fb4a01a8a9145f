//! Path text helpers
//!
//! Name texts accept both separator styles on input; synthesized paths
//! always use the forward slash.

/// Returns true for either accepted separator character
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Joins a directory path and an entry name with the canonical separator
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir.ends_with(is_separator) {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Splits text at the first separator: `(component, remainder, sep_len)`.
/// The remainder excludes the separator itself; `sep_len` is 0 when no
/// separator was present.
pub fn take_component(text: &str) -> (&str, &str, usize) {
    match text.find(is_separator) {
        Some(idx) => (&text[..idx], &text[idx + 1..], 1),
        None => (text, "", 0),
    }
}

/// Returns the final component of a path
pub fn base_name(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or(path)
}

/// Splits a path into `(parent, name)` at the last separator
pub fn split_parent(path: &str) -> Option<(&str, &str)> {
    let idx = path.rfind(is_separator)?;
    Some((&path[..idx], &path[idx + 1..]))
}
