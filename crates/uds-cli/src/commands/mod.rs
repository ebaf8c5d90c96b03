//! CLI commands and argument parsing.

pub mod reference;
pub mod search;
pub mod show;
pub mod versions;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use uds_registry::{Catalog, Package, RegistryClient, RegistryConfig};

/// UDS - browse the UDS package registry
#[derive(Parser)]
#[command(name = "uds")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the registry catalog
    Search(search::SearchArgs),

    /// Show details for one package
    Show(show::ShowArgs),

    /// List flavors and versions for one package
    Versions(versions::VersionsArgs),

    /// Build an OCI image reference for a package version
    Ref(reference::RefArgs),

    /// Print version information
    Version,
}

/// Registry connection options shared by every command.
#[derive(Args)]
pub struct RegistryOpts {
    /// Registry URL (defaults to the public UDS registry)
    #[arg(long, env = "UDS_REGISTRY_URL")]
    pub registry: Option<String>,

    /// Session cookie for authenticated catalogs
    #[arg(long, env = "UDS_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Skip the `public` organization
    #[arg(long)]
    pub ignore_public: bool,

    /// Skip the `airgap-store` organization
    #[arg(long)]
    pub ignore_airgap_store: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,
}

impl RegistryOpts {
    /// Builds the registry configuration from these options.
    #[must_use]
    pub fn to_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::new()
            .with_ignore_public(self.ignore_public)
            .with_ignore_airgap_store(self.ignore_airgap_store)
            .with_timeout(Duration::from_secs(self.timeout));

        if let Some(ref url) = self.registry {
            config = config.with_registry_url(url);
        }
        if let Some(ref cookie) = self.session_cookie {
            config = config.with_session_cookie(cookie);
        }
        config
    }

    /// Creates a registry client from these options.
    pub fn client(&self) -> Result<RegistryClient> {
        RegistryClient::new(self.to_config()).context("Failed to create registry client")
    }
}

/// An `ORG/PACKAGE` coordinate as typed on the command line.
#[derive(Debug, Clone)]
pub struct PackageRef {
    /// Organization name.
    pub org: String,
    /// Package (repository) name.
    pub name: String,
}

impl std::str::FromStr for PackageRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((org, name)) if !org.is_empty() && !name.is_empty() => Ok(Self {
                org: org.to_string(),
                name: name.to_string(),
            }),
            _ => Err(format!("expected ORG/PACKAGE, got '{s}'")),
        }
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// Locates a package in a fetched catalog.
pub fn locate<'a>(catalog: &'a Catalog, package: &PackageRef) -> Result<&'a Package> {
    catalog
        .catalog
        .get(&package.org)
        .and_then(|org| org.repos.iter().find(|p| p.repo == package.name))
        .with_context(|| format!("Package not found: {package}"))
}
