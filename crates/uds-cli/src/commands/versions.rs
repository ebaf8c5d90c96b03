//! Versions command implementation.
//!
//! Lists a package's flavors, or the versions within one flavor, with the
//! latest tag marked. A failed metadata fetch degrades to the `latest_tag`
//! fallback instead of aborting.

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::warn;

use uds_registry::version::{self, FlavorColor};
use uds_registry::{Host, NotifyKind, Package, PackageMetadata};

use crate::host::TerminalHost;

use super::{locate, PackageRef, RegistryOpts};

/// Arguments for the versions command.
#[derive(Args)]
pub struct VersionsArgs {
    /// Package coordinate, ORG/PACKAGE
    pub package: PackageRef,

    /// Flavor to list versions for (omit to list flavors)
    #[arg(short, long)]
    pub flavor: Option<String>,

    /// Registry connection options
    #[command(flatten)]
    pub registry: RegistryOpts,
}

/// Runs the versions command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the package is unknown,
/// or an undeclared flavor is requested.
pub async fn run(args: &VersionsArgs) -> Result<()> {
    let client = args.registry.client()?;
    let catalog = client
        .fetch_catalog()
        .await
        .context("Failed to load catalog")?;
    let package = locate(&catalog, &args.package)?;

    let metadata = load_metadata(&client, &args.package).await;
    let declared = version::declared_flavors(package);

    if let Some(ref flavor) = args.flavor {
        if !declared.iter().any(|f| f == flavor) {
            bail!(
                "Unknown flavor '{flavor}' for {}; declared flavors: {}",
                args.package,
                declared.join(", ")
            );
        }
        print_versions(package, &version::versions_for_flavor(&metadata, flavor), flavor);
    } else if declared.is_empty() {
        print_versions(package, &version::all_versions(package, &metadata), "");
    } else {
        println!("Flavors of {}:", args.package);
        for flavor in declared {
            println!("  {}", styled_flavor(flavor));
        }
        println!();
        println!("Run with --flavor to list versions.");
    }

    Ok(())
}

async fn load_metadata(
    client: &uds_registry::RegistryClient,
    package: &PackageRef,
) -> PackageMetadata {
    match client
        .fetch_package_metadata(&package.org, &package.name)
        .await
    {
        Ok(metadata) => metadata,
        Err(err) => {
            warn!(package = %package, error = %err, "Metadata fetch failed");
            TerminalHost.notify(
                NotifyKind::Failure,
                "Failed to load package versions",
                &err.to_string(),
            );
            PackageMetadata::default()
        }
    }
}

fn print_versions(package: &Package, versions: &[String], flavor: &str) {
    for v in versions {
        if version::is_latest(package, v, flavor) {
            println!("{v}  (latest)");
        } else {
            println!("{v}");
        }
    }
}

/// Renders a flavor name with its ANSI display color.
fn styled_flavor(flavor: &str) -> String {
    let code = match FlavorColor::of(flavor) {
        FlavorColor::Muted => "\x1b[2m",
        FlavorColor::Purple => "\x1b[35m",
        FlavorColor::Green => "\x1b[32m",
        FlavorColor::Default => "",
    };
    if code.is_empty() {
        flavor.to_string()
    } else {
        format!("{code}{flavor}\x1b[0m")
    }
}
