//! Reference-selection flow.
//!
//! The flow a user walks to pick a version (and flavor, when the package
//! declares any) before copying or inserting a reference. It is an explicit
//! state machine with pure transitions so it can be tested without any UI
//! harness; rendering is the caller's problem.
//!
//! ```text
//! Loading ──metadata_loaded──> VersionList            (no declared flavors)
//!                          └─> FlavorPicker           (declared flavors)
//! FlavorPicker ──select_flavor──> FlavorVersions(f)
//! FlavorVersions(f) ──change_flavor──> FlavorPicker
//! ```
//!
//! Terminal actions (copy reference, copy tag, insert) are available from
//! `VersionList` and `FlavorVersions` and do not change state.

use crate::catalog::Package;
use crate::version::declared_flavors;

/// State of the reference-selection flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceFlow {
    /// Metadata fetch in flight.
    Loading,

    /// Version list for a flavorless package.
    VersionList,

    /// Flavor selection pending.
    FlavorPicker,

    /// Version list for the selected flavor.
    FlavorVersions(String),
}

impl Default for ReferenceFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceFlow {
    /// Initial state: the metadata fetch is in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self::Loading
    }

    /// Applies the metadata-loaded edge.
    ///
    /// A failed fetch takes the same edge: the caller substitutes empty
    /// metadata and the flow degrades to the `latest_tag` fallback instead of
    /// blocking. Routing depends only on the package's declared flavors.
    /// No-op outside `Loading`.
    #[must_use]
    pub fn metadata_loaded(self, package: &Package) -> Self {
        match self {
            Self::Loading => {
                if declared_flavors(package).is_empty() {
                    Self::VersionList
                } else {
                    Self::FlavorPicker
                }
            }
            other => other,
        }
    }

    /// Selects a flavor from the picker. No-op outside `FlavorPicker`.
    #[must_use]
    pub fn select_flavor(self, flavor: &str) -> Self {
        match self {
            Self::FlavorPicker => Self::FlavorVersions(flavor.to_string()),
            other => other,
        }
    }

    /// The "change flavor" action: clears the selection and returns to the
    /// picker. No-op outside `FlavorVersions`.
    #[must_use]
    pub fn change_flavor(self) -> Self {
        match self {
            Self::FlavorVersions(_) => Self::FlavorPicker,
            other => other,
        }
    }

    /// Whether a terminal action (copy/insert) is available in this state.
    #[must_use]
    pub const fn can_finish(&self) -> bool {
        matches!(self, Self::VersionList | Self::FlavorVersions(_))
    }

    /// The flavor the flow has settled on; empty for the flavorless path.
    #[must_use]
    pub fn selected_flavor(&self) -> &str {
        match self {
            Self::FlavorVersions(flavor) => flavor,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(flavors: Option<Vec<&str>>) -> Package {
        Package {
            repo: "widget".to_string(),
            title: "Widget".to_string(),
            description: String::new(),
            architectures: vec![],
            categories: None,
            flavors: flavors.map(|f| f.into_iter().map(str::to_string).collect()),
            icon: None,
            latest_tag: "1.0.0".to_string(),
            size: None,
            tag_count: None,
            tagline: None,
            last_build: None,
            last_updated: None,
            url: None,
            readme: None,
        }
    }

    #[test]
    fn test_flavorless_package_goes_to_version_list() {
        let flow = ReferenceFlow::new().metadata_loaded(&package(None));
        assert_eq!(flow, ReferenceFlow::VersionList);
        assert!(flow.can_finish());
    }

    #[test]
    fn test_empty_flavor_list_counts_as_flavorless() {
        let flow = ReferenceFlow::new().metadata_loaded(&package(Some(vec![])));
        assert_eq!(flow, ReferenceFlow::VersionList);
    }

    #[test]
    fn test_flavored_package_goes_to_picker() {
        let flow = ReferenceFlow::new().metadata_loaded(&package(Some(vec!["unicorn"])));
        assert_eq!(flow, ReferenceFlow::FlavorPicker);
        assert!(!flow.can_finish());
    }

    #[test]
    fn test_select_flavor_then_back() {
        let pkg = package(Some(vec!["unicorn", "upstream"]));
        let flow = ReferenceFlow::new()
            .metadata_loaded(&pkg)
            .select_flavor("unicorn");

        assert_eq!(flow, ReferenceFlow::FlavorVersions("unicorn".to_string()));
        assert_eq!(flow.selected_flavor(), "unicorn");
        assert!(flow.can_finish());

        let flow = flow.change_flavor();
        assert_eq!(flow, ReferenceFlow::FlavorPicker);
        assert_eq!(flow.selected_flavor(), "");
    }

    #[test]
    fn test_loading_cannot_finish() {
        assert!(!ReferenceFlow::new().can_finish());
    }

    #[test]
    fn test_transitions_are_noops_out_of_state() {
        // Selecting a flavor before metadata arrives does nothing.
        let flow = ReferenceFlow::new().select_flavor("unicorn");
        assert_eq!(flow, ReferenceFlow::Loading);

        // Going back from the version list does nothing.
        let flow = ReferenceFlow::VersionList.change_flavor();
        assert_eq!(flow, ReferenceFlow::VersionList);

        // A second metadata load does not re-route a settled flow.
        let flow = ReferenceFlow::VersionList.metadata_loaded(&package(Some(vec!["unicorn"])));
        assert_eq!(flow, ReferenceFlow::VersionList);
    }
}
