// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filterable metadata listing for dashboard menu rendering.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use atrium_core::PluginId;

use crate::registry::PageRegistry;

/// Externally visible projection of a page descriptor. Never carries content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListingEntry {
    /// Page name, the lookup key for page delivery.
    pub name: String,
    /// Display name for menu rendering.
    pub display_name: String,
    /// Whether the page belongs in the main navigation menu.
    pub enable_in_main_menu: bool,
    /// Identifier of the owning plugin.
    pub plugin_id: PluginId,
}

/// Filter for the page listing.
///
/// The three recognized states are explicit: `None` applies no filtering,
/// `Some(true)` keeps menu-enabled pages, `Some(false)` keeps menu-disabled
/// pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub enable_in_main_menu: Option<bool>,
}

/// Produces page metadata listings from the immutable registry.
pub struct ListingService {
    registry: Arc<PageRegistry>,
}

impl ListingService {
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self { registry }
    }

    /// List entries matching `filter`, preserving registration order.
    ///
    /// Always returns a concrete (possibly empty) vector. A pure function of
    /// the registry: no I/O, cannot fail.
    pub fn list(&self, filter: ListFilter) -> Vec<PageListingEntry> {
        self.registry
            .iter()
            .filter(|page| match filter.enable_in_main_menu {
                Some(wanted) => page.enable_in_main_menu == wanted,
                None => true,
            })
            .map(|page| PageListingEntry {
                name: page.name.clone(),
                display_name: page.display_name.clone(),
                enable_in_main_menu: page.enable_in_main_menu,
                plugin_id: page.plugin_id.clone(),
            })
            .collect()
    }
}
