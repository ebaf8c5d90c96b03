//! OCI image reference construction.
//!
//! Pure string composition, no I/O. The output must match the
//! `host/org/repo:tag` grammar the registry expects; inputs are assumed to be
//! valid path and tag characters already, so no URL-encoding is applied.

/// Composes the tag string for a version/flavor pair.
///
/// A non-empty flavor is appended as a `-{flavor}` suffix.
///
/// # Examples
///
/// ```
/// use uds_registry::reference::tag_of;
///
/// assert_eq!(tag_of("1.2.3", ""), "1.2.3");
/// assert_eq!(tag_of("1.2.3", "unicorn"), "1.2.3-unicorn");
/// ```
#[must_use]
pub fn tag_of(version: &str, flavor: &str) -> String {
    if flavor.is_empty() {
        version.to_string()
    } else {
        format!("{version}-{flavor}")
    }
}

/// Composes a full OCI image reference.
///
/// Any leading `http://` or `https://` scheme is stripped from the registry
/// URL before composing `host/org/package:tag`.
///
/// # Examples
///
/// ```
/// use uds_registry::reference::oci_reference;
///
/// let image = oci_reference("https://registry.example.com", "acme", "widget", "1.0.0", "upstream");
/// assert_eq!(image, "registry.example.com/acme/widget:1.0.0-upstream");
/// ```
#[must_use]
pub fn oci_reference(
    registry_url: &str,
    org: &str,
    package: &str,
    version: &str,
    flavor: &str,
) -> String {
    let host = strip_scheme(registry_url);
    let tag = tag_of(version, flavor);
    format!("{host}/{org}/{package}:{tag}")
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
