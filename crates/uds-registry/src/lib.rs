//! # UDS Registry
//!
//! Client library for browsing the UDS package registry catalog.
//!
//! The registry publishes a catalog of Zarf packages grouped by organization,
//! plus per-package tag metadata. This crate covers everything up to the
//! presentation layer:
//!
//! - [`RegistryClient`] - Authenticated, timeout-bounded HTTP access to the
//!   catalog and metadata endpoints
//! - [`Catalog`] - The catalog aggregate and its flattening into a flat,
//!   filterable package list
//! - [`version`] - Flavor and version derivation from tag metadata
//! - [`reference`] - OCI image reference and tag construction
//! - [`ReferenceFlow`] - The reference-selection flow as a pure state machine
//! - [`Host`] - The boundary to the hosting environment (clipboard, insert,
//!   notifications)
//!
//! ## Example
//!
//! ```rust
//! use uds_registry::reference;
//!
//! let image = reference::oci_reference(
//!     "https://registry.defenseunicorns.com",
//!     "uds",
//!     "core",
//!     "0.30.0",
//!     "unicorn",
//! );
//! assert_eq!(image, "registry.defenseunicorns.com/uds/core:0.30.0-unicorn");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod host;
pub mod metadata;
pub mod reference;
pub mod version;

pub use catalog::{Catalog, CatalogEntry, FilterOptions, Organization, Package};
pub use client::RegistryClient;
pub use config::{RegistryConfig, DEFAULT_REGISTRY_URL, SESSION_COOKIE};
pub use error::RegistryError;
pub use flow::ReferenceFlow;
pub use host::{Host, NotifyKind};
pub use metadata::{PackageMetadata, Tag};
pub use version::FlavorColor;
