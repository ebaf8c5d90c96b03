//! Flavor and version derivation from tag metadata.
//!
//! Versions within a flavor group are a set keyed by tag name: tags that
//! share `(name, flavor)` across architectures collapse to one version.
//!
//! Ordering is lexicographic descending, not semantic-version order, so
//! `v10` sorts before `v2`. This matches what the registry UI shows today;
//! do not switch to semver comparison without a coordinated change.

use std::collections::BTreeSet;

use crate::catalog::Package;
use crate::metadata::PackageMetadata;
use crate::reference::tag_of;

/// The package's declared flavor list, which is authoritative for selection.
///
/// Tag data is not consulted; a package with no declared flavors is treated
/// as flavorless even if stray tags carry one.
#[must_use]
pub fn declared_flavors(package: &Package) -> &[String] {
    package.flavors.as_deref().unwrap_or_default()
}

/// Distinct version names whose derived flavor equals `flavor`, descending.
///
/// Flavorless tags match the empty string.
#[must_use]
pub fn versions_for_flavor(metadata: &PackageMetadata, flavor: &str) -> Vec<String> {
    let names: BTreeSet<&str> = metadata
        .tags
        .iter()
        .filter(|tag| tag.flavor() == flavor)
        .map(|tag| tag.name.as_str())
        .collect();

    names.into_iter().rev().map(str::to_string).collect()
}

/// Distinct version names across all flavors, descending.
///
/// When the metadata carries no tags at all, falls back to a single entry
/// holding the package's `latest_tag` so the caller always has something to
/// offer.
#[must_use]
pub fn all_versions(package: &Package, metadata: &PackageMetadata) -> Vec<String> {
    if metadata.tags.is_empty() {
        return vec![package.latest_tag.clone()];
    }

    let names: BTreeSet<&str> = metadata.tags.iter().map(|tag| tag.name.as_str()).collect();
    names.into_iter().rev().map(str::to_string).collect()
}

/// Whether `version` under `flavor` is the package's latest tag.
#[must_use]
pub fn is_latest(package: &Package, version: &str, flavor: &str) -> bool {
    package.latest_tag == tag_of(version, flavor)
}

/// Display color assigned to a flavor.
///
/// The lookup is total and stable: unknown flavors always map to
/// [`FlavorColor::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorColor {
    /// Muted/secondary styling, used for `upstream`.
    Muted,
    /// Purple, used for `unicorn`.
    Purple,
    /// Green, used for `registry1`.
    Green,
    /// Unstyled fallback for everything else.
    Default,
}

impl FlavorColor {
    /// Looks up the color for a flavor name.
    ///
    /// # Examples
    ///
    /// ```
    /// use uds_registry::FlavorColor;
    ///
    /// assert_eq!(FlavorColor::of("unicorn"), FlavorColor::Purple);
    /// assert_eq!(FlavorColor::of("mystery"), FlavorColor::Default);
    /// ```
    #[must_use]
    pub fn of(flavor: &str) -> Self {
        match flavor {
            "upstream" => Self::Muted,
            "unicorn" => Self::Purple,
            "registry1" => Self::Green,
            _ => Self::Default,
        }
    }
}
