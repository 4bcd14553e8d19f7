// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture resources and descriptor builders.
//!
//! Fixtures build registries from synthetic plugin sources, so tests can
//! exercise resolution and listing without touching the filesystem.

use std::sync::Arc;

use async_trait::async_trait;

use atrium_core::{AtriumError, PageKind, PluginId};
use atrium_plugin::{PageDescriptor, PageResource, PluginDescriptor, StaticResource};

/// A resource that always fails to open, standing in for a missing or
/// corrupted plugin file.
#[derive(Debug, Clone, Default)]
pub struct BrokenResource;

#[async_trait]
impl PageResource for BrokenResource {
    async fn open(&self) -> Result<Vec<u8>, AtriumError> {
        Err(AtriumError::Resource {
            message: "fixture resource is intentionally broken".to_string(),
            source: None,
        })
    }

    fn describe(&self) -> String {
        "<broken fixture>".to_string()
    }
}

/// Build an HTML page descriptor backed by in-memory content.
pub fn html_page(name: &str, plugin_id: &str, menu: bool, content: &str) -> PageDescriptor {
    in_memory_page(name, plugin_id, menu, PageKind::Html, content)
}

/// Build a JSON page descriptor backed by in-memory content.
pub fn json_page(name: &str, plugin_id: &str, menu: bool, content: &str) -> PageDescriptor {
    in_memory_page(name, plugin_id, menu, PageKind::Json, content)
}

/// Build a page descriptor whose resource always fails to open.
pub fn broken_page(name: &str, plugin_id: &str) -> PageDescriptor {
    PageDescriptor {
        name: name.to_string(),
        display_name: name.to_string(),
        kind: PageKind::Html,
        enable_in_main_menu: false,
        plugin_id: PluginId(plugin_id.to_string()),
        resource: Arc::new(BrokenResource),
    }
}

/// Build a plugin descriptor owning the given pages.
pub fn plugin(id: &str, name: &str, pages: Vec<PageDescriptor>) -> PluginDescriptor {
    PluginDescriptor {
        id: PluginId(id.to_string()),
        name: name.to_string(),
        pages,
    }
}

fn in_memory_page(
    name: &str,
    plugin_id: &str,
    menu: bool,
    kind: PageKind,
    content: &str,
) -> PageDescriptor {
    PageDescriptor {
        name: name.to_string(),
        display_name: name.to_string(),
        kind,
        enable_in_main_menu: menu,
        plugin_id: PluginId(plugin_id.to_string()),
        resource: Arc::new(StaticResource::new(content.as_bytes().to_vec())),
    }
}
