//! Per-package tag metadata.
//!
//! Tags are fetched on demand via `GET /uds/metadata/{org}/{package}` and are
//! not part of the catalog aggregate. They live only as long as the view that
//! requested them; there is no cross-view cache.

use serde::{Deserialize, Serialize};

/// Tag metadata for a single package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Published tags, in registry order.
    pub tags: Vec<Tag>,
}

/// One published, architecture-specific build record.
///
/// The tag `name` is a version identifier and is only unique per
/// `(package, flavor)` pair; multiple architectures share a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Registry-assigned sort hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,

    /// Version name (e.g., `0.30.0`).
    pub name: String,

    /// Architecture this build targets.
    pub architecture: String,

    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Artifact kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Embedded Zarf package descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zarf_data: Option<ZarfData>,

    /// CVE scan status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve_status: Option<String>,

    /// CVE counts by severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve_summary: Option<CveSummary>,
}

/// Zarf descriptor embedded in a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZarfData {
    /// Zarf package kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Package version as recorded by Zarf.
    pub version: String,

    /// Build flavor this tag belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,

    /// Components bundled in the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ZarfComponent>>,
}

/// One component of a Zarf package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZarfComponent {
    /// Component name.
    pub name: String,

    /// Component description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the component is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Helm charts installed by the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<String>>,
}

/// CVE counts by severity for one tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CveSummary {
    /// Critical findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_critical: Option<u64>,

    /// High findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_high: Option<u64>,

    /// Medium findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_medium: Option<u64>,

    /// Low findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_low: Option<u64>,

    /// Negligible findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_negligible: Option<u64>,

    /// Findings with unknown severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_unknown: Option<u64>,
}

impl Tag {
    /// The flavor this tag belongs to: `zarf_data.flavor` when present,
    /// otherwise the empty no-flavor case.
    #[must_use]
    pub fn flavor(&self) -> &str {
        self.zarf_data
            .as_ref()
            .and_then(|zarf| zarf.flavor.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tag_with_zarf_data() {
        let body = r#"{
            "tags": [
                {
                    "name": "0.30.0",
                    "architecture": "amd64",
                    "zarf_data": {
                        "version": "0.30.0",
                        "flavor": "unicorn",
                        "components": [
                            {"name": "istio", "required": true, "charts": ["istiod"]}
                        ]
                    },
                    "cve_summary": {"total_critical": 0, "total_high": 2}
                }
            ]
        }"#;

        let metadata: PackageMetadata = serde_json::from_str(body).unwrap();
        let tag = &metadata.tags[0];
        assert_eq!(tag.flavor(), "unicorn");
        assert_eq!(tag.cve_summary.as_ref().unwrap().total_high, Some(2));
        let components = tag.zarf_data.as_ref().unwrap().components.as_ref().unwrap();
        assert_eq!(components[0].name, "istio");
    }

    #[test]
    fn test_flavor_defaults_to_empty() {
        let body = r#"{"tags": [{"name": "1.0.0", "architecture": "arm64"}]}"#;
        let metadata: PackageMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(metadata.tags[0].flavor(), "");
    }

    #[test]
    fn test_flavor_empty_when_zarf_data_has_none() {
        let body = r#"{
            "tags": [
                {"name": "1.0.0", "architecture": "amd64", "zarf_data": {"version": "1.0.0"}}
            ]
        }"#;
        let metadata: PackageMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(metadata.tags[0].flavor(), "");
    }
}
