//! CSS class string helpers.

/// Join class fragments with single spaces, skipping empty ones.
pub fn classes<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for fragment in fragments.into_iter().map(str::trim).filter(|f| !f.is_empty()) {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(fragment);
    }
    joined
}

/// Append `modifier` to `base` only when `active`.
pub fn with_modifier(base: &str, modifier: &str, active: bool) -> String {
    if active {
        classes([base, modifier])
    } else {
        base.to_string()
    }
}
