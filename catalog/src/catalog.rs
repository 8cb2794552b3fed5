use crate::model::CatalogError;
use crate::model::FileEntry;
use crate::model::FileId;
use crate::model::FileRecord;
use crate::name::display_name;
use std::collections::HashMap;
use std::path::Path;

/// Immutable table of catalog files, in declaration order. Built once at
/// startup; lookups borrow from it for the life of the session.
#[derive(Debug)]
pub struct Catalog {
    files: Vec<FileRecord>,
    by_name: HashMap<String, usize>,
}

/// A symbol resolved to its owning file, with display fields derived on
/// demand. Symbols are not stored as distinct entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolHit<'a> {
    pub name: &'a str,
    pub display_name: &'a str,
    pub file: &'a FileRecord,
}

impl<'a> SymbolHit<'a> {
    pub fn file_display_name(&self) -> &'a str {
        display_name(&self.file.name)
    }
}

impl Catalog {
    /// Builds a catalog from entries in declaration order, assigning ids
    /// starting at 1. File names must be unique; symbol names must be
    /// non-empty. A symbol declared by more than one file keeps
    /// first-match-wins lookup semantics but is logged, since the later
    /// declaration is silently shadowed.
    pub fn new(entries: Vec<FileEntry>) -> Result<Self, CatalogError> {
        let mut files = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut symbol_owner: HashMap<String, String> = HashMap::new();

        for (index, entry) in entries.into_iter().enumerate() {
            if by_name.contains_key(&entry.name) {
                return Err(CatalogError::DuplicateFile(entry.name));
            }
            for symbol in &entry.symbols {
                if symbol.is_empty() {
                    return Err(CatalogError::EmptySymbol { file: entry.name });
                }
                match symbol_owner.get(symbol) {
                    Some(owner) => tracing::warn!(
                        "symbol {symbol} in {} is shadowed by {owner}",
                        entry.name
                    ),
                    None => {
                        symbol_owner.insert(symbol.clone(), entry.name.clone());
                    }
                }
            }
            by_name.insert(entry.name.clone(), index);
            files.push(FileRecord {
                id: index as FileId + 1,
                name: entry.name,
                kind: entry.kind,
                symbols: entry.symbols,
            });
        }

        Ok(Self { files, by_name })
    }

    /// Parses a catalog from its JSON source: an array of
    /// `{name, kind, symbols}` entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<FileEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn first_file(&self) -> Option<&FileRecord> {
        self.files.first()
    }

    /// Exact match on the fully-qualified file name.
    pub fn file_by_name(&self, name: &str) -> Option<&FileRecord> {
        self.by_name.get(name).map(|&index| &self.files[index])
    }

    pub fn file_by_id(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|file| file.id == id)
    }

    /// Scans files in catalog order and returns the first one declaring
    /// `name`. Linear on purpose: catalogs are small, and declaration
    /// order is what gives duplicates their first-match-wins semantics.
    pub fn symbol_by_name<'a>(&'a self, name: &'a str) -> Option<SymbolHit<'a>> {
        self.files
            .iter()
            .find(|file| file.symbols.iter().any(|symbol| symbol == name))
            .map(|file| SymbolHit {
                name,
                display_name: display_name(name),
                file,
            })
    }
}
