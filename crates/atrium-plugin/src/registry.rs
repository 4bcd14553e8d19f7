// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable configuration-page registry.
//!
//! Built exactly once after all plugins have loaded, then shared read-only
//! across request handlers for the lifetime of the process. Lookup is by
//! page name; listing follows registration order (plugin load order, then
//! each plugin's own declaration order). Unloading a plugin requires a full
//! rebuild; there is no partial teardown.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use atrium_core::{PageKind, PluginId};

use crate::resource::PageResource;

/// A plugin as seen by the registry: identity plus contributed pages.
#[derive(Debug)]
pub struct PluginDescriptor {
    /// Unique plugin identifier.
    pub id: PluginId,
    /// Human-readable plugin name.
    pub name: String,
    /// Configuration pages in declaration order.
    pub pages: Vec<PageDescriptor>,
}

/// A single configuration page contributed by a plugin.
#[derive(Clone)]
pub struct PageDescriptor {
    /// Registry-wide lookup key.
    pub name: String,
    /// Display name for menu rendering.
    pub display_name: String,
    /// Content kind, determines the delivered MIME type.
    pub kind: PageKind,
    /// Whether the page appears in the main navigation menu.
    pub enable_in_main_menu: bool,
    /// Identifier of the owning plugin.
    pub plugin_id: PluginId,
    /// Locator used to open the page content.
    pub resource: Arc<dyn PageResource>,
}

impl std::fmt::Debug for PageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDescriptor")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("kind", &self.kind)
            .field("enable_in_main_menu", &self.enable_in_main_menu)
            .field("plugin_id", &self.plugin_id)
            .field("resource", &self.resource.describe())
            .finish()
    }
}

/// Process-wide aggregation of configuration pages across loaded plugins.
///
/// Immutable after [`PageRegistry::build`]; concurrent readers never observe
/// a partially built registry because the value only becomes reachable once
/// construction has finished.
pub struct PageRegistry {
    /// Descriptors in registration order.
    pages: Vec<PageDescriptor>,
    /// Page name -> position in `pages`.
    index: HashMap<String, usize>,
}

impl PageRegistry {
    /// Build the registry from plugins in load order.
    ///
    /// Pages with an empty name are dropped. When two plugins declare the
    /// same page name, the first registration wins and the later one is
    /// dropped; neither case is an error, since a mis-described plugin page
    /// must not block the entire dashboard from loading.
    pub fn build(plugins: impl IntoIterator<Item = PluginDescriptor>) -> Self {
        let mut pages: Vec<PageDescriptor> = Vec::new();
        let mut index = HashMap::new();

        for plugin in plugins {
            let PluginDescriptor { id, pages: declared, .. } = plugin;
            for page in declared {
                if page.name.is_empty() {
                    debug!(plugin = id.0.as_str(), "dropping page with empty name");
                    continue;
                }
                match index.entry(page.name.clone()) {
                    Entry::Occupied(existing) => {
                        let kept: &PageDescriptor = &pages[*existing.get()];
                        debug!(
                            page = page.name.as_str(),
                            kept = kept.plugin_id.0.as_str(),
                            dropped = page.plugin_id.0.as_str(),
                            "duplicate page name, keeping first registration"
                        );
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(pages.len());
                        pages.push(page);
                    }
                }
            }
        }

        Self { pages, index }
    }

    /// Look up a page descriptor by name.
    pub fn get(&self, name: &str) -> Option<&PageDescriptor> {
        self.index.get(name).map(|&i| &self.pages[i])
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true when no pages are registered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("pages", &self.pages.len())
            .finish()
    }
}
