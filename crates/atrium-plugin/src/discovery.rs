// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin discovery from a plugins directory.
//!
//! Each plugin is a subdirectory containing a `plugin.toml` manifest. The
//! scan runs once at startup, before the registry is built; sorted directory
//! order defines plugin load order, so registration order is deterministic
//! across platforms.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use atrium_core::AtriumError;

use crate::manifest::{parse_plugin_manifest, PluginManifest};
use crate::registry::{PageDescriptor, PluginDescriptor};
use crate::resource::FileResource;

/// Manifest file name looked up inside each plugin directory.
pub const MANIFEST_FILE: &str = "plugin.toml";

/// Scan `dir` for plugins and produce descriptors in load order.
///
/// A missing plugins directory yields an empty set. A plugin whose manifest
/// is unreadable or unparsable is skipped with a warning; one mis-described
/// plugin must not block the entire dashboard from loading.
pub fn discover_plugins(dir: &Path) -> Result<Vec<PluginDescriptor>, AtriumError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "plugins directory does not exist, loading no plugins");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AtriumError::Resource {
                message: format!("failed to read plugins directory {}", dir.display()),
                source: Some(Box::new(e)),
            });
        }
    };

    let mut plugin_dirs: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    plugin_dirs.sort();

    let mut plugins = Vec::new();
    for plugin_dir in plugin_dirs {
        match load_plugin(&plugin_dir) {
            Ok(Some(descriptor)) => {
                debug!(
                    plugin = descriptor.id.0.as_str(),
                    pages = descriptor.pages.len(),
                    "discovered plugin"
                );
                plugins.push(descriptor);
            }
            // No manifest file: not a plugin directory, ignore silently.
            Ok(None) => {}
            Err(error) => {
                warn!(
                    dir = %plugin_dir.display(),
                    %error,
                    "skipping plugin with invalid manifest"
                );
            }
        }
    }
    Ok(plugins)
}

/// Load one plugin directory, returning `None` when it carries no manifest.
fn load_plugin(plugin_dir: &Path) -> Result<Option<PluginDescriptor>, AtriumError> {
    let manifest_path = plugin_dir.join(MANIFEST_FILE);
    let content = match std::fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AtriumError::Manifest(format!(
                "failed to read {}: {e}",
                manifest_path.display()
            )));
        }
    };

    let manifest = parse_plugin_manifest(&content)?;
    Ok(Some(into_descriptor(manifest, plugin_dir)))
}

/// Convert a parsed manifest into a registry descriptor, attaching
/// filesystem-backed resources rooted at the plugin directory.
fn into_descriptor(manifest: PluginManifest, plugin_dir: &Path) -> PluginDescriptor {
    let mut pages = Vec::with_capacity(manifest.pages.len());
    for page in manifest.pages {
        if page.resource.is_empty() {
            debug!(
                plugin = manifest.id.0.as_str(),
                page = page.name.as_str(),
                "dropping page without a resource path"
            );
            continue;
        }
        let resource = Arc::new(FileResource::new(plugin_dir.join(&page.resource)));
        let display_name = page.display_name.unwrap_or_else(|| page.name.clone());
        pages.push(PageDescriptor {
            name: page.name,
            display_name,
            kind: page.kind,
            enable_in_main_menu: page.enable_in_main_menu,
            plugin_id: manifest.id.clone(),
            resource,
        });
    }

    PluginDescriptor {
        id: manifest.id,
        name: manifest.name,
        pages,
    }
}
