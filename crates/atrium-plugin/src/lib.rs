// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration-page registry and delivery core for the Atrium dashboard.
//!
//! Plugins contribute administrative UI fragments ("configuration pages") to
//! the central dashboard. This crate aggregates their descriptors into an
//! immutable [`PageRegistry`] built once after plugin discovery, resolves
//! page names to raw content through [`PageResolver`], and projects page
//! metadata into menu listings through [`ListingService`].
//!
//! Content is opaque to this crate: a page is a MIME type plus bytes, never
//! interpreted or transformed.

pub mod discovery;
pub mod listing;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod resource;

pub use discovery::discover_plugins;
pub use listing::{ListFilter, ListingService, PageListingEntry};
pub use manifest::{parse_plugin_manifest, PageManifest, PluginManifest};
pub use registry::{PageDescriptor, PageRegistry, PluginDescriptor};
pub use resolver::{PageContent, PageResolver};
pub use resource::{FileResource, PageResource, StaticResource};
