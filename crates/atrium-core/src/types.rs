// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Atrium workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginId(pub String);

/// The kind of content a configuration page carries.
///
/// Determines the MIME type the delivery layer advertises: an HTML page is
/// served as `text/html`, a JSON data module as `application/json`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Html,
    Json,
}

impl PageKind {
    /// MIME type for page content of this kind.
    pub fn mime_type(self) -> &'static str {
        match self {
            PageKind::Html => "text/html",
            PageKind::Json => "application/json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_follows_kind() {
        assert_eq!(PageKind::Html.mime_type(), "text/html");
        assert_eq!(PageKind::Json.mime_type(), "application/json");
    }

    #[test]
    fn page_kind_defaults_to_html() {
        assert_eq!(PageKind::default(), PageKind::Html);
    }
}
