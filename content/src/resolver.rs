use crate::fallback::file_fallback;
use crate::fallback::file_not_found;
use crate::fallback::symbol_fallback;
use crate::fallback::symbol_not_found;
use crate::store::ContentStore;
use docdex_catalog::Catalog;
use std::sync::Arc;

/// Where a fragment's body came from. The body itself is opaque and is
/// inserted into the content pane verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentOrigin {
    Store,
    Fallback,
    NotFound,
}

#[derive(Clone, Debug)]
pub struct Fragment {
    pub html: String,
    pub origin: FragmentOrigin,
}

impl Fragment {
    fn fetched(html: String) -> Self {
        Self {
            html,
            origin: FragmentOrigin::Store,
        }
    }

    fn fallback(html: String) -> Self {
        Self {
            html,
            origin: FragmentOrigin::Fallback,
        }
    }

    fn not_found(html: String) -> Self {
        Self {
            html,
            origin: FragmentOrigin::NotFound,
        }
    }
}

/// Resolves fragments for catalog entities. Fetch failures never escape:
/// they resolve into fallback fragments built from catalog metadata, so the
/// worst outcome for a caller is placeholder content.
pub struct ContentResolver {
    catalog: Arc<Catalog>,
    store: ContentStore,
}

impl ContentResolver {
    pub fn new(catalog: Arc<Catalog>, store: ContentStore) -> Self {
        Self { catalog, store }
    }

    /// Fetch path first; the catalog is only consulted to build the
    /// fallback. A file that is neither fetchable nor cataloged resolves
    /// to a minimal not-found fragment.
    pub async fn resolve_file(&self, name: &str) -> Fragment {
        match self.store.fetch(name).await {
            Ok(body) => Fragment::fetched(body),
            Err(err) => {
                tracing::warn!("fragment fetch failed for file {name}: {err}");
                match self.catalog.file_by_name(name) {
                    Some(file) => Fragment::fallback(file_fallback(
                        file,
                        &self.store.url_for(name),
                        &err.to_string(),
                    )),
                    None => Fragment::not_found(file_not_found(name)),
                }
            }
        }
    }

    /// A symbol absent from the catalog is a terminal miss and never hits
    /// the network.
    pub async fn resolve_symbol(&self, name: &str) -> Fragment {
        let Some(hit) = self.catalog.symbol_by_name(name) else {
            return Fragment::not_found(symbol_not_found(name));
        };
        match self.store.fetch(name).await {
            Ok(body) => Fragment::fetched(body),
            Err(err) => {
                tracing::warn!("fragment fetch failed for symbol {name}: {err}");
                Fragment::fallback(symbol_fallback(
                    &hit,
                    &self.store.url_for(name),
                    &err.to_string(),
                ))
            }
        }
    }
}
