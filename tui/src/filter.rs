//! Substring filtering over the catalog. Recomputed from scratch on every
//! query change; there is no ranking, only case-insensitive containment
//! against display names and fully-qualified names.

use crate::tree::TreeState;
use docdex_catalog::Catalog;
use docdex_catalog::FileId;
use docdex_catalog::name::display_name;
use std::collections::HashSet;

/// Per-node visibility under the current query. The default value is the
/// unfiltered state where everything is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    filtered: bool,
    files: HashSet<FileId>,
    symbols: HashSet<(FileId, usize)>,
}

impl Visibility {
    pub fn file_visible(&self, id: FileId) -> bool {
        !self.filtered || self.files.contains(&id)
    }

    /// Symbols are addressed by owner file and position in its declaration
    /// list, so duplicate names stay independently addressable.
    pub fn symbol_visible(&self, file: FileId, index: usize) -> bool {
        !self.filtered || self.symbols.contains(&(file, index))
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }
}

/// Applies `raw_query` to the catalog. An empty post-trim query resets to
/// full visibility and leaves expansion untouched. A non-empty query makes
/// a file visible when it matches or any of its symbols match, and
/// force-expands every visible file so matching descendants stay
/// reachable. Files are never force-collapsed.
pub fn apply_filter(catalog: &Catalog, raw_query: &str, tree: &mut TreeState) -> Visibility {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Visibility::default();
    }

    let mut visibility = Visibility {
        filtered: true,
        files: HashSet::new(),
        symbols: HashSet::new(),
    };

    for file in catalog.files() {
        let file_matches = name_matches(&file.name, &query);
        let mut any_symbol_matches = false;
        for (index, symbol) in file.symbols.iter().enumerate() {
            if name_matches(symbol, &query) {
                visibility.symbols.insert((file.id, index));
                any_symbol_matches = true;
            }
        }
        if file_matches || any_symbol_matches {
            visibility.files.insert(file.id);
            tree.expand(file.id);
        }
    }

    visibility
}

fn name_matches(name: &str, query: &str) -> bool {
    display_name(name).to_lowercase().contains(query) || name.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use docdex_catalog::FileEntry;
    use docdex_catalog::FileKind;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, symbols: &[&str]) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            kind: FileKind::Header,
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            entry("buffer/cren_buffer.h", &["buffer/BufferQuad"]),
            entry(
                "camera/cren_camera.h",
                &["camera/cren_camera_create", "camera/cren_camera_rotate"],
            ),
        ])
        .expect("catalog")
    }

    #[test]
    fn empty_query_resets_to_full_visibility() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "   ", &mut tree);
        assert!(!visibility.is_filtered());
        assert!(visibility.file_visible(1));
        assert!(visibility.file_visible(2));
        assert!(visibility.symbol_visible(2, 1));
        // Expansion state is left alone on reset.
        assert!(!tree.is_expanded(1));
    }

    #[test]
    fn symbol_match_makes_owner_file_visible_and_expanded() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "quad", &mut tree);

        assert!(visibility.file_visible(1));
        assert!(visibility.symbol_visible(1, 0));
        assert!(tree.is_expanded(1));

        assert!(!visibility.file_visible(2));
        assert!(!tree.is_expanded(2));
    }

    #[test]
    fn no_match_hides_the_file() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "xyz", &mut tree);
        assert!(!visibility.file_visible(1));
        assert!(!visibility.file_visible(2));
    }

    #[test]
    fn file_name_match_keeps_file_visible_without_symbol_matches() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "cren_buffer", &mut tree);
        assert!(visibility.file_visible(1));
        assert!(!visibility.symbol_visible(1, 0));
    }

    #[test]
    fn matching_is_case_insensitive_and_trims_the_query() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "  BUFFERQ  ", &mut tree);
        assert!(visibility.symbol_visible(1, 0));
    }

    #[test]
    fn namespace_text_matches_through_the_fully_qualified_name() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "camera/", &mut tree);
        assert!(visibility.file_visible(2));
        assert!(visibility.symbol_visible(2, 0));
        assert!(visibility.symbol_visible(2, 1));
    }

    #[test]
    fn identical_queries_are_idempotent() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let first = apply_filter(&catalog, "rotate", &mut tree);
        let second = apply_filter(&catalog, "rotate", &mut tree);
        assert_eq!(first, second);
    }

    #[test]
    fn extending_a_query_never_unhides_a_file() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let broad = apply_filter(&catalog, "quad", &mut tree);
        let narrow = apply_filter(&catalog, "quadxyz", &mut tree);
        for file in catalog.files() {
            if !broad.file_visible(file.id) {
                assert!(!narrow.file_visible(file.id));
            }
        }
        assert!(!narrow.file_visible(1));
    }

    #[test]
    fn visible_files_with_visible_symbols_are_always_expanded() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "cren", &mut tree);
        for file in catalog.files() {
            let any_symbol = (0..file.symbols.len())
                .any(|index| visibility.symbol_visible(file.id, index));
            if visibility.file_visible(file.id) && any_symbol {
                assert!(tree.is_expanded(file.id), "file {} not expanded", file.name);
            }
        }
    }

    #[test]
    fn filtering_never_collapses_a_manually_expanded_file() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        tree.expand(2);
        apply_filter(&catalog, "quad", &mut tree);
        assert!(tree.is_expanded(2));
    }
}
