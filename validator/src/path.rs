//! Property path construction.
//!
//! Paths only grow during a run: `author.books[0].title`.

/// Append a sub-path to a base path.
///
/// Element segments (`[key]`) attach directly; property names are joined
/// with a dot unless the base is empty.
pub fn append(base: &str, sub: &str) -> String {
    if sub.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return sub.strip_prefix('.').unwrap_or(sub).to_string();
    }
    if sub.starts_with('[') || sub.starts_with('.') {
        format!("{}{}", base, sub)
    } else {
        format!("{}.{}", base, sub)
    }
}

/// Path segment for a collection element or map field.
pub fn element(key: &str) -> String {
    format!("[{}]", key)
}
