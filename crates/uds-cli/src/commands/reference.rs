//! Ref command implementation.
//!
//! Builds an OCI image reference (or bare tag) for a selected package
//! version and hands it to the host. The selection path is validated by the
//! same state machine the interactive flow uses, so a flavor is required
//! exactly when the package declares flavors.

use anyhow::{bail, ensure, Context, Result};
use clap::Args;
use tracing::warn;

use uds_registry::reference::{oci_reference, tag_of};
use uds_registry::{version, Host, NotifyKind, PackageMetadata, ReferenceFlow};

use crate::host::TerminalHost;

use super::{locate, PackageRef, RegistryOpts};

/// Arguments for the ref command.
#[derive(Args)]
pub struct RefArgs {
    /// Package coordinate, ORG/PACKAGE
    pub package: PackageRef,

    /// Version to reference
    #[arg(short, long)]
    pub version: String,

    /// Flavor (required when the package declares flavors)
    #[arg(short, long)]
    pub flavor: Option<String>,

    /// Emit only the tag, not the full reference
    #[arg(long)]
    pub tag_only: bool,

    /// Insert at the cursor instead of copying
    #[arg(long)]
    pub insert: bool,

    /// Registry connection options
    #[command(flatten)]
    pub registry: RegistryOpts,
}

/// Runs the ref command.
///
/// # Errors
///
/// Returns an error if the package is unknown, the flavor/version selection
/// is invalid, or the catalog cannot be loaded.
pub async fn run(args: &RefArgs) -> Result<()> {
    let host = TerminalHost;
    let client = args.registry.client()?;

    let catalog = client
        .fetch_catalog()
        .await
        .context("Failed to load catalog")?;
    let package = locate(&catalog, &args.package)?;

    // A failed metadata fetch takes the same edge with empty metadata and the
    // flow falls back to latest_tag.
    let metadata = match client
        .fetch_package_metadata(&args.package.org, &args.package.name)
        .await
    {
        Ok(metadata) => metadata,
        Err(err) => {
            warn!(package = %args.package, error = %err, "Metadata fetch failed");
            host.notify(
                NotifyKind::Failure,
                "Failed to load package versions",
                &err.to_string(),
            );
            PackageMetadata::default()
        }
    };

    let flow = ReferenceFlow::new().metadata_loaded(package);
    let flow = if flow == ReferenceFlow::FlavorPicker {
        let declared = version::declared_flavors(package);
        let Some(ref flavor) = args.flavor else {
            bail!(
                "{} declares flavors; pass --flavor (one of: {})",
                args.package,
                declared.join(", ")
            );
        };
        ensure!(
            declared.iter().any(|f| f == flavor),
            "Unknown flavor '{flavor}' for {}; declared flavors: {}",
            args.package,
            declared.join(", ")
        );
        flow.select_flavor(flavor)
    } else {
        ensure!(
            args.flavor.is_none(),
            "{} declares no flavors; drop --flavor",
            args.package
        );
        flow
    };
    ensure!(flow.can_finish(), "Flavor selection incomplete");
    let flavor = flow.selected_flavor();

    let available = if flavor.is_empty() {
        version::all_versions(package, &metadata)
    } else {
        version::versions_for_flavor(&metadata, flavor)
    };
    ensure!(
        available.iter().any(|v| v == &args.version),
        "Version '{}' not found for {}; available: {}",
        args.version,
        args.package,
        available.join(", ")
    );

    let text = if args.tag_only {
        tag_of(&args.version, flavor)
    } else {
        oci_reference(
            client.config().base_url(),
            &args.package.org,
            &args.package.name,
            &args.version,
            flavor,
        )
    };

    if args.insert {
        host.insert_at_cursor(&text);
        host.notify(NotifyKind::Success, "Inserted into frontmost application", &text);
    } else {
        host.copy_to_clipboard(&text);
        host.notify(NotifyKind::Success, "Copied to clipboard", &text);
    }

    Ok(())
}
