//! Fully-qualified identifiers have the shape `"namespace/leaf"`. Both
//! helpers are total: a string without a separator is its own display name
//! and carries no namespace.

/// Returns the portion after the last `/`, or the whole string when there
/// is no separator.
pub fn display_name(name: &str) -> &str {
    match name.rsplit_once('/') {
        Some((_, leaf)) => leaf,
        None => name,
    }
}

/// Returns the portion before the first `/`, or `None` when there is no
/// separator.
pub fn namespace(name: &str) -> Option<&str> {
    name.split_once('/').map(|(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn qualified_name_splits_at_separators() {
        assert_eq!(display_name("camera/cren_camera_rotate"), "cren_camera_rotate");
        assert_eq!(namespace("camera/cren_camera_rotate"), Some("camera"));
    }

    #[test]
    fn nested_name_uses_last_separator_for_display_first_for_namespace() {
        assert_eq!(display_name("a/b/c"), "c");
        assert_eq!(namespace("a/b/c"), Some("a"));
    }

    #[test]
    fn bare_name_round_trips() {
        assert_eq!(display_name("cren"), "cren");
        assert_eq!(namespace("cren"), None);
    }

    #[test]
    fn empty_string_is_its_own_display_name() {
        assert_eq!(display_name(""), "");
        assert_eq!(namespace(""), None);
    }
}
