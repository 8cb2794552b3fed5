//! Synthesized fragments for entities the content store cannot supply.
//!
//! The markup mirrors what real fragments look like so the content pane
//! can treat both the same way. Each fallback carries the captured failure
//! reason verbatim and names the resource an author would need to create.

use docdex_catalog::FileRecord;
use docdex_catalog::SymbolHit;
use docdex_catalog::name::display_name;

pub fn file_fallback(file: &FileRecord, resource: &str, reason: &str) -> String {
    let symbols = file
        .symbols
        .iter()
        .map(|symbol| display_name(symbol))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "<h2>{display}</h2>\n\
         <p><strong>Full Name:</strong> {name}</p>\n\
         <p><strong>Type:</strong> {kind}</p>\n\
         <p><strong>Symbols:</strong> {symbols}</p>\n\
         <div class=\"warning\">Documentation not found. Error: {reason}</div>\n\
         <div class=\"note\">Create <code>{resource}</code> to add documentation.</div>",
        display = file.display_name(),
        name = file.name,
        kind = file.kind.label(),
    )
}

pub fn symbol_fallback(hit: &SymbolHit<'_>, resource: &str, reason: &str) -> String {
    format!(
        "<h2>{display}</h2>\n\
         <p><strong>Full Name:</strong> {name}</p>\n\
         <p><strong>File:</strong> {file}</p>\n\
         <div class=\"warning\">Documentation not found. Error: {reason}</div>\n\
         <div class=\"note\">Create <code>{resource}</code> to add documentation.</div>",
        display = hit.display_name,
        name = hit.name,
        file = hit.file_display_name(),
    )
}

pub fn file_not_found(name: &str) -> String {
    format!("<h2>File not found: {name}</h2>")
}

pub fn symbol_not_found(name: &str) -> String {
    format!("<h2>Symbol not found: {name}</h2>")
}
