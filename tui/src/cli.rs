use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docdex", about = "Terminal browser for a documentation catalog", version)]
pub struct Cli {
    /// Path to a catalog JSON file (an array of {name, kind, symbols}
    /// entries). Defaults to the embedded CRen catalog snapshot.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Base URL of the documentation content store. Fragments are fetched
    /// from <URL>/<identifier>.html.
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:8080/docs")]
    pub docs_url: String,

    /// Log file path. The UI owns the terminal, so logs never go to
    /// stderr; RUST_LOG controls the filter.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
