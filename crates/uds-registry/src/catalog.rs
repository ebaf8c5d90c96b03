//! Catalog data model and flattening.
//!
//! The registry returns the full catalog in a single response: organizations
//! keyed by name, each carrying its package list. The aggregate is replaced
//! wholesale on every load; there is no partial-update path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known organization that can be excluded by preference.
pub const PUBLIC_ORG: &str = "public";

/// Well-known organization that can be excluded by preference.
pub const AIRGAP_STORE_ORG: &str = "airgap-store";

/// The full catalog as returned by `GET /uds/catalog`.
///
/// The organization map preserves the order the registry sent; flattening
/// iterates it in that order, not sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Whether the session behind this response was authenticated.
    pub authenticated: bool,

    /// Organizations keyed by name, in received order.
    pub catalog: IndexMap<String, Organization>,
}

/// One organization and its published packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name (the map key, repeated in the body).
    pub org: String,

    /// Display name, when it differs from `org`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_custom_name: Option<String>,

    /// Whether the organization's metadata is publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<bool>,

    /// Packages published by this organization, in registry order.
    pub repos: Vec<Package>,

    /// Timestamp of the organization's last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// One package in the catalog.
///
/// Identity is `(org, repo)`. Packages are immutable once fetched and live
/// for one catalog-load cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Repository name, unique within its organization.
    pub repo: String,

    /// Human-readable title.
    pub title: String,

    /// Long description.
    pub description: String,

    /// Architectures the package is published for.
    pub architectures: Vec<String>,

    /// Comma-separated category list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    /// Declared build flavors. This list, not the tag data, is authoritative
    /// for flavor selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<String>>,

    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Most recently published tag, possibly flavor-suffixed.
    pub latest_tag: String,

    /// Size in bytes of the latest build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Number of published tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_count: Option<u64>,

    /// One-line tagline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Timestamp of the last build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_build: Option<String>,

    /// Timestamp of the last metadata update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Upstream repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// README contents, markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}

/// Options controlling which organizations survive flattening.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Skip the organization named `public` (exact match).
    pub exclude_public: bool,

    /// Skip the organization named `airgap-store` (exact match).
    pub exclude_airgap_store: bool,
}

/// A package paired with its owning organization name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry<'a> {
    /// Owning organization name.
    pub org: &'a str,

    /// The package itself.
    pub package: &'a Package,
}

impl Catalog {
    /// Flattens the per-organization catalog into a flat ordered package list.
    ///
    /// Organizations are visited in received order. Exclusion matches are
    /// exact and case-sensitive: `"Public"` does not match `public`.
    /// Per-organization package order is preserved.
    #[must_use]
    pub fn flatten(&self, filters: FilterOptions) -> Vec<CatalogEntry<'_>> {
        let mut entries = Vec::new();

        for (name, organization) in &self.catalog {
            if filters.exclude_public && name == PUBLIC_ORG {
                continue;
            }
            if filters.exclude_airgap_store && name == AIRGAP_STORE_ORG {
                continue;
            }
            for package in &organization.repos {
                entries.push(CatalogEntry { org: name, package });
            }
        }

        tracing::info!(packages = entries.len(), "Flattened catalog");
        entries
    }
}

impl CatalogEntry<'_> {
    /// Returns the `org/repo` coordinate of this entry.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.org, self.package.repo)
    }

    /// Case-insensitive substring match over repo, title, organization,
    /// description, and tagline. An empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&query);

        hit(&self.package.repo)
            || hit(&self.package.title)
            || hit(self.org)
            || hit(&self.package.description)
            || self.package.tagline.as_deref().is_some_and(hit)
    }
}
