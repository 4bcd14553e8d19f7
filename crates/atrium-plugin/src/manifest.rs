// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! A manifest declares the plugin's identity and the configuration pages it
//! contributes to the dashboard. Identity must be present; individual page
//! declarations are lenient, since a single mis-described page is dropped at
//! registry build time rather than failing the whole plugin.

use serde::Deserialize;

use atrium_core::{AtriumError, PageKind, PluginId};

/// Parsed plugin manifest: identity plus declared configuration pages.
#[derive(Debug, Clone)]
pub struct PluginManifest {
    /// Unique plugin identifier (e.g., "dlna").
    pub id: PluginId,
    /// Human-readable plugin name.
    pub name: String,
    /// Configuration pages in declaration order.
    pub pages: Vec<PageManifest>,
}

/// A single configuration page declared by a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageManifest {
    /// Page name, the registry-wide lookup key. Empty names survive parsing
    /// and are dropped at registry build time.
    #[serde(default)]
    pub name: String,

    /// Display name shown in dashboard menus. Falls back to `name`.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Content kind, `html` or `json`.
    #[serde(default)]
    pub kind: PageKind,

    /// Whether the page appears in the dashboard's main navigation.
    #[serde(default)]
    pub enable_in_main_menu: bool,

    /// Content path relative to the plugin directory.
    #[serde(default)]
    pub resource: String,
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
struct PluginManifestFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    id: String,
    name: String,
    #[serde(default)]
    pages: Vec<PageManifest>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that `id` and `name` are non-empty. Page-level problems are not
/// rejected here; the registry applies its own skip policy.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, AtriumError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| AtriumError::Manifest(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    if section.id.trim().is_empty() {
        return Err(AtriumError::Manifest(
            "plugin manifest: id must not be empty".to_string(),
        ));
    }

    if section.name.trim().is_empty() {
        return Err(AtriumError::Manifest(
            "plugin manifest: name must not be empty".to_string(),
        ));
    }

    Ok(PluginManifest {
        id: PluginId(section.id),
        name: section.name,
        pages: section.pages,
    })
}
