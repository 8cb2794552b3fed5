use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Stable per-session identifier for a catalog file. Assigned in
/// declaration order starting at 1 and used only as a UI correlation key,
/// never as semantic identity.
pub type FileId = u32;

/// Kind of source artifact a catalog file represents. Descriptive only;
/// matching logic never consults it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Source,
    Header,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Source => "C Source",
            FileKind::Header => "C Header",
        }
    }
}

/// One file entry as it appears in the catalog source, before ids are
/// assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    pub symbols: Vec<String>,
}

/// A catalog file with its session id. `name` is the globally unique
/// fully-qualified key; `symbols` is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub kind: FileKind,
    pub symbols: Vec<String>,
}

impl FileRecord {
    pub fn display_name(&self) -> &str {
        crate::name::display_name(&self.name)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate file name in catalog: {0}")]
    DuplicateFile(String),
    #[error("file {file} declares an empty symbol name")]
    EmptySymbol { file: String },
}
