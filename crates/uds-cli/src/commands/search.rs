//! Search command implementation.
//!
//! Loads the full catalog, flattens it with the configured organization
//! filters, and prints packages matching the query. Re-running the command is
//! the retry path after a failed load.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use uds_registry::{CatalogEntry, Host, NotifyKind};

use crate::host::TerminalHost;

use super::RegistryOpts;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Filter query matched against repo, title, org, description, tagline
    pub query: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Registry connection options
    #[command(flatten)]
    pub registry: RegistryOpts,
}

/// Output format for the search command.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per package.
    #[default]
    Text,
    /// JSON array of catalog entries.
    Json,
}

/// Runs the search command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn run(args: &SearchArgs) -> Result<()> {
    let host = TerminalHost;
    let client = args.registry.client()?;

    let catalog = client
        .fetch_catalog()
        .await
        .context("Failed to load catalog")?;

    let entries = catalog.flatten(client.config().filters());
    host.notify(
        NotifyKind::Success,
        "Catalog loaded",
        &format!("Found {} packages", entries.len()),
    );

    let query = args.query.as_deref().unwrap_or("");
    let matching: Vec<CatalogEntry<'_>> = entries
        .into_iter()
        .filter(|entry| entry.matches(query))
        .collect();
    debug!(matching = matching.len(), query, "Filtered catalog");

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matching)?);
        }
        OutputFormat::Text => {
            for entry in &matching {
                let subtitle = entry
                    .package
                    .tagline
                    .as_deref()
                    .unwrap_or(&entry.package.title);
                println!("{:<40} {subtitle}", entry.qualified_name());
            }
        }
    }

    Ok(())
}
