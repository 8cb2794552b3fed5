//! Flattens catalog order, tree expansion and search visibility into the
//! ordered row list the explorer widget and the keyboard cursor operate
//! on. Deterministic: catalog order for files, declaration order for
//! symbols, no re-ordering or deduplication.

use crate::filter::Visibility;
use crate::tree::NodeKey;
use crate::tree::TreeState;
use docdex_catalog::Catalog;
use docdex_catalog::FileId;
use docdex_catalog::name::display_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    FileHeader { expanded: bool },
    Symbol,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerRow {
    pub key: NodeKey,
    pub file_id: FileId,
    pub label: String,
    pub kind: RowKind,
}

pub fn visible_rows(catalog: &Catalog, tree: &TreeState, visibility: &Visibility) -> Vec<ExplorerRow> {
    let mut rows = Vec::new();
    for file in catalog.files() {
        if !visibility.file_visible(file.id) {
            continue;
        }
        let expanded = tree.is_expanded(file.id);
        rows.push(ExplorerRow {
            key: NodeKey::File(file.name.clone()),
            file_id: file.id,
            label: file.display_name().to_string(),
            kind: RowKind::FileHeader { expanded },
        });
        if !expanded {
            continue;
        }
        for (index, symbol) in file.symbols.iter().enumerate() {
            if !visibility.symbol_visible(file.id, index) {
                continue;
            }
            rows.push(ExplorerRow {
                key: NodeKey::Symbol(symbol.clone()),
                file_id: file.id,
                label: display_name(symbol).to_string(),
                kind: RowKind::Symbol,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::filter::apply_filter;
    use docdex_catalog::FileEntry;
    use docdex_catalog::FileKind;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FileEntry {
                name: "buffer/cren_buffer.h".to_string(),
                kind: FileKind::Header,
                symbols: vec!["buffer/BufferQuad".to_string()],
            },
            FileEntry {
                name: "camera/cren_camera.h".to_string(),
                kind: FileKind::Header,
                symbols: vec![
                    "camera/cren_camera_create".to_string(),
                    "camera/cren_camera_rotate".to_string(),
                ],
            },
        ])
        .expect("catalog")
    }

    fn labels(rows: &[ExplorerRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn collapsed_files_contribute_only_their_header() {
        let catalog = catalog();
        let rows = visible_rows(&catalog, &TreeState::default(), &Visibility::default());
        assert_eq!(labels(&rows), vec!["cren_buffer.h", "cren_camera.h"]);
    }

    #[test]
    fn expanded_file_interleaves_symbols_in_declaration_order() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        tree.expand(2);
        let rows = visible_rows(&catalog, &tree, &Visibility::default());
        assert_eq!(
            labels(&rows),
            vec![
                "cren_buffer.h",
                "cren_camera.h",
                "cren_camera_create",
                "cren_camera_rotate",
            ]
        );
        assert_eq!(rows[0].kind, RowKind::FileHeader { expanded: false });
        assert_eq!(rows[1].kind, RowKind::FileHeader { expanded: true });
        assert_eq!(rows[2].kind, RowKind::Symbol);
        assert_eq!(rows[3].file_id, 2);
    }

    #[test]
    fn filtered_rows_keep_only_matches_and_their_headers() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        let visibility = apply_filter(&catalog, "rotate", &mut tree);
        let rows = visible_rows(&catalog, &tree, &visibility);
        assert_eq!(labels(&rows), vec!["cren_camera.h", "cren_camera_rotate"]);
    }

    #[test]
    fn flattening_is_deterministic() {
        let catalog = catalog();
        let mut tree = TreeState::default();
        tree.expand(1);
        tree.expand(2);
        let first = visible_rows(&catalog, &tree, &Visibility::default());
        let second = visible_rows(&catalog, &tree, &Visibility::default());
        assert_eq!(first, second);
    }
}
