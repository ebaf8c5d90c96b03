//! Show command implementation.
//!
//! Renders the detail view for one package as markdown, matching what the
//! registry's own detail page surfaces: title, organization, tagline,
//! description, package information, and README.

use anyhow::{Context, Result};
use clap::Args;

use uds_registry::Package;

use super::{locate, PackageRef, RegistryOpts};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Package coordinate, ORG/PACKAGE
    pub package: PackageRef,

    /// Registry connection options
    #[command(flatten)]
    pub registry: RegistryOpts,
}

/// Runs the show command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the package is not in
/// it.
pub async fn run(args: &ShowArgs) -> Result<()> {
    let client = args.registry.client()?;
    let catalog = client
        .fetch_catalog()
        .await
        .context("Failed to load catalog")?;

    let package = locate(&catalog, &args.package)?;
    print!("{}", detail_markdown(&args.package.org, package));
    Ok(())
}

/// Builds the detail markdown for a package.
fn detail_markdown(org: &str, package: &Package) -> String {
    let mut markdown = String::new();

    let title = if package.title.is_empty() {
        &package.repo
    } else {
        &package.title
    };
    markdown.push_str(&format!("# {title}\n\n"));
    markdown.push_str(&format!("**Organization:** {org}\n\n"));

    if let Some(ref tagline) = package.tagline {
        markdown.push_str(&format!("*{tagline}*\n\n"));
    }

    if !package.description.is_empty() {
        markdown.push_str(&format!("## Description\n\n{}\n\n", package.description));
    }

    markdown.push_str("## Package Information\n\n");
    markdown.push_str(&format!("- **Package Name:** {}\n", package.repo));
    markdown.push_str(&format!("- **Latest Version:** {}\n", package.latest_tag));
    markdown.push_str(&format!(
        "- **Architectures:** {}\n",
        package.architectures.join(", ")
    ));

    if let Some(flavors) = package.flavors.as_deref().filter(|f| !f.is_empty()) {
        markdown.push_str(&format!("- **Flavors:** {}\n", flavors.join(", ")));
    }

    if let Some(ref categories) = package.categories {
        markdown.push_str(&format!("- **Categories:** {categories}\n"));
    }

    if let Some(ref url) = package.url {
        markdown.push_str(&format!("- **Repository:** [{url}]({url})\n"));
    }

    if let Some(ref readme) = package.readme {
        markdown.push_str(&format!("\n## README\n\n{readme}\n"));
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> Package {
        Package {
            repo: "core".to_string(),
            title: "UDS Core".to_string(),
            description: "Core services".to_string(),
            architectures: vec!["amd64".to_string(), "arm64".to_string()],
            categories: Some("platform".to_string()),
            flavors: Some(vec!["upstream".to_string(), "unicorn".to_string()]),
            icon: None,
            latest_tag: "0.30.0-unicorn".to_string(),
            size: None,
            tag_count: None,
            tagline: Some("Secure runtime".to_string()),
            last_build: None,
            last_updated: None,
            url: Some("https://github.com/defenseunicorns/uds-core".to_string()),
            readme: None,
        }
    }

    #[test]
    fn test_detail_markdown_sections() {
        let markdown = detail_markdown("uds", &package());

        assert!(markdown.starts_with("# UDS Core\n"));
        assert!(markdown.contains("**Organization:** uds"));
        assert!(markdown.contains("*Secure runtime*"));
        assert!(markdown.contains("## Description\n\nCore services"));
        assert!(markdown.contains("- **Latest Version:** 0.30.0-unicorn"));
        assert!(markdown.contains("- **Architectures:** amd64, arm64"));
        assert!(markdown.contains("- **Flavors:** upstream, unicorn"));
        assert!(markdown.contains("- **Categories:** platform"));
    }

    #[test]
    fn test_detail_markdown_falls_back_to_repo_name() {
        let mut pkg = package();
        pkg.title = String::new();
        pkg.tagline = None;
        pkg.flavors = None;

        let markdown = detail_markdown("uds", &pkg);
        assert!(markdown.starts_with("# core\n"));
        assert!(!markdown.contains("**Flavors:**"));
    }
}
