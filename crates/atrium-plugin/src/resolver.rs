// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page content resolution with fail-soft fallback.
//!
//! The resolver is the only component in the subsystem that performs I/O.
//! A broken resource degrades to "not present": callers cannot distinguish a
//! corrupt plugin file from a page name that never existed, and a single bad
//! plugin can never crash page delivery.

use std::sync::Arc;

use tracing::debug;

use crate::registry::PageRegistry;

/// Resolved page content: MIME type plus the exact stored bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// MIME type derived from the descriptor's declared kind.
    pub mime_type: &'static str,
    /// The resource bytes, untransformed.
    pub bytes: Vec<u8>,
}

/// Resolves page names to their content.
pub struct PageResolver {
    registry: Arc<PageRegistry>,
}

impl PageResolver {
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve `name` to its content.
    ///
    /// Returns `None` for unknown names and for resources that cannot be
    /// opened or fully read. The registry is immutable, so a failed read
    /// stays failed for the process lifetime; there is nothing to retry.
    pub async fn resolve(&self, name: &str) -> Option<PageContent> {
        let page = self.registry.get(name)?;

        match page.resource.open().await {
            Ok(bytes) => Some(PageContent {
                mime_type: page.kind.mime_type(),
                bytes,
            }),
            Err(error) => {
                debug!(
                    page = name,
                    resource = page.resource.describe().as_str(),
                    %error,
                    "page resource unreadable, treating as not found"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PageDescriptor, PluginDescriptor};
    use crate::resource::{PageResource, StaticResource};
    use async_trait::async_trait;
    use atrium_core::{AtriumError, PageKind, PluginId};

    /// Stands in for a missing or truncated plugin file.
    struct UnreadableResource;

    #[async_trait]
    impl PageResource for UnreadableResource {
        async fn open(&self) -> Result<Vec<u8>, AtriumError> {
            Err(AtriumError::Resource {
                message: "unreadable".to_string(),
                source: None,
            })
        }

        fn describe(&self) -> String {
            "<unreadable>".to_string()
        }
    }

    fn resolver_with(pages: Vec<PageDescriptor>) -> PageResolver {
        let plugin = PluginDescriptor {
            id: PluginId("test".into()),
            name: "Test".into(),
            pages,
        };
        PageResolver::new(Arc::new(PageRegistry::build(vec![plugin])))
    }

    fn descriptor(name: &str, kind: PageKind, resource: Arc<dyn PageResource>) -> PageDescriptor {
        PageDescriptor {
            name: name.to_string(),
            display_name: name.to_string(),
            kind,
            enable_in_main_menu: false,
            plugin_id: PluginId("test".into()),
            resource,
        }
    }

    #[tokio::test]
    async fn unknown_name_resolves_to_none() {
        let resolver = resolver_with(vec![]);
        assert!(resolver.resolve("nope").await.is_none());
    }

    #[tokio::test]
    async fn readable_html_page_returns_exact_bytes() {
        let source = b"<html><body>DLNA</body></html>".to_vec();
        let resolver = resolver_with(vec![descriptor(
            "dlna",
            PageKind::Html,
            Arc::new(StaticResource::new(source.clone())),
        )]);

        let content = resolver.resolve("dlna").await.unwrap();
        assert_eq!(content.mime_type, "text/html");
        assert_eq!(content.bytes, source);
    }

    #[tokio::test]
    async fn json_page_gets_json_mime_type() {
        let resolver = resolver_with(vec![descriptor(
            "profiles",
            PageKind::Json,
            Arc::new(StaticResource::new(b"[]".to_vec())),
        )]);

        let content = resolver.resolve("profiles").await.unwrap();
        assert_eq!(content.mime_type, "application/json");
    }

    #[tokio::test]
    async fn unreadable_resource_resolves_to_none() {
        let resolver = resolver_with(vec![descriptor(
            "broken",
            PageKind::Html,
            Arc::new(UnreadableResource),
        )]);

        assert!(resolver.resolve("broken").await.is_none());
    }

    #[tokio::test]
    async fn re_resolving_a_failed_page_stays_failed() {
        let resolver = resolver_with(vec![descriptor(
            "broken",
            PageKind::Html,
            Arc::new(UnreadableResource),
        )]);

        assert!(resolver.resolve("broken").await.is_none());
        assert!(resolver.resolve("broken").await.is_none());
    }
}
