//! Terminal front end for the documentation catalog browser.
//!
//! The explorer pane shows the catalog as a two-level collapsible tree
//! with a live substring filter; selecting a node resolves its fragment
//! from the content store and shows it in the content pane. Presentation
//! state (`tree`, `filter`, `rows`) is pure and testable without a
//! terminal; `app` wires it to crossterm events and spawned resolver
//! tasks.

mod app;
mod app_event;
mod app_event_sender;
pub mod cli;
mod content_view;
mod explorer_view;
pub mod filter;
pub mod rows;
pub mod tree;
mod tui;

pub use cli::Cli;

use color_eyre::eyre::Result;
use docdex_catalog::Catalog;
use docdex_content::ContentResolver;
use docdex_content::ContentStore;
use std::sync::Arc;

/// Catalog snapshot used when no `--catalog` file is given.
const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.json");

pub async fn run_main(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::from_json(DEFAULT_CATALOG)?,
    };
    let catalog = Arc::new(catalog);
    tracing::info!(
        "catalog loaded: {} files, content store at {}",
        catalog.len(),
        cli.docs_url
    );

    let store = ContentStore::new(cli.docs_url);
    let resolver = Arc::new(ContentResolver::new(catalog.clone(), store));

    let mut terminal = tui::init()?;
    let result = app::App::run(&mut terminal, catalog, resolver).await;
    tui::restore()?;
    result
}
