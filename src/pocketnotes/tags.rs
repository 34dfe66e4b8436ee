//! Tag normalization.
//!
//! A tag is stored trimmed and lowercased. Empty tags are never stored and a
//! note never carries the same tag twice; the first occurrence wins, so the
//! order a user typed tags in is the order they are displayed in.

/// Normalizes a single tag. Returns `None` when nothing is left after trimming.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Normalizes a list of tags, dropping empties and duplicates while keeping
/// first-insertion order.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.into_iter().filter_map(|t| normalize_tag(t.as_ref())) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_trimmed_and_lowercased() {
        assert_eq!(normalize_tag("  Work "), Some("work".to_string()));
        assert_eq!(normalize_tag("RUST"), Some("rust".to_string()));
    }

    #[test]
    fn blank_tag_is_rejected() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn tags_dedupe_after_normalizing() {
        let tags = normalize_tags(["Travel", " travel", "home", "", "HOME", "x"]);
        assert_eq!(tags, vec!["travel", "home", "x"]);
    }

    #[test]
    fn tags_keep_insertion_order() {
        let tags = normalize_tags(vec!["zeta".to_string(), "alpha".to_string()]);
        assert_eq!(tags, vec!["zeta", "alpha"]);
    }
}
