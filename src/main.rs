mod application;
mod domain;
mod infrastructure;
mod presentation;

use crate::application::services::CatalogService;
use crate::infrastructure::config::Config;
use crate::infrastructure::http_client::HyperHttpClient;
use crate::presentation::cli::Cli;
use clap::Parser;

/// Courl: the course catalog, curled
///
/// Builds a hierarchical catalog path from whichever identifying components
/// are supplied (year, semester, subject code, course number, CRN), issues
/// a single GET against the Course Explorer API, and saves the raw XML
/// response to disk.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let http_client = HyperHttpClient::new();
    let catalog_service = CatalogService::new(Box::new(http_client), Config::default());

    if let Err(err) = cli.run(&catalog_service).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
