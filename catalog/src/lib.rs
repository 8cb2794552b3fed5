//! Static catalog of documented source files and the symbols they declare.
//!
//! The catalog is built once at startup from a JSON definition and is
//! immutable afterwards. Presentation state (expansion, selection,
//! filtering) lives with the UI layer and is never written back here.

mod catalog;
mod model;
pub mod name;

pub use catalog::Catalog;
pub use catalog::SymbolHit;
pub use model::CatalogError;
pub use model::FileEntry;
pub use model::FileId;
pub use model::FileKind;
pub use model::FileRecord;
