//! Comma-joined text form of list-valued fields.
//!
//! Editable forms carry ordered lists (a project's tech stack, an
//! experience description) as one comma-separated line. Decoding trims
//! whitespace and drops empty segments; encoding joins with `", "`.

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
