//! Fragment resolution against the documentation content store.
//!
//! A fragment is an opaque markup block addressed by a fully-qualified
//! identifier. Resolution fetches `<base>/<identifier>.html` first and, when
//! the store cannot supply a body, synthesizes a fallback fragment from
//! catalog metadata instead of surfacing the failure to the caller.

mod fallback;
mod resolver;
mod store;

pub use fallback::file_fallback;
pub use fallback::file_not_found;
pub use fallback::symbol_fallback;
pub use fallback::symbol_not_found;
pub use resolver::ContentResolver;
pub use resolver::Fragment;
pub use resolver::FragmentOrigin;
pub use store::ContentStore;
pub use store::FetchError;
