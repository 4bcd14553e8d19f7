// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Atrium dashboard server.
//!
//! This crate provides the error type and the shared identifiers used
//! throughout the Atrium workspace. Domain types for the page registry live
//! in `atrium-plugin`; only what multiple crates share belongs here.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AtriumError;
pub use types::{PageKind, PluginId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atrium_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = AtriumError::Config("test".into());
        let _manifest = AtriumError::Manifest("test".into());
        let _resource = AtriumError::Resource {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _server = AtriumError::Server {
            message: "test".into(),
            source: None,
        };
        let _internal = AtriumError::Internal("test".into());
    }

    #[test]
    fn page_kind_display_parse_roundtrip() {
        use std::str::FromStr;

        for kind in [PageKind::Html, PageKind::Json] {
            let s = kind.to_string();
            let parsed = PageKind::from_str(&s).expect("should parse back");
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn page_kind_serialization() {
        let json = serde_json::to_string(&PageKind::Html).expect("should serialize");
        assert_eq!(json, "\"html\"");
        let parsed: PageKind = serde_json::from_str("\"json\"").expect("should deserialize");
        assert_eq!(parsed, PageKind::Json);
    }

    #[test]
    fn plugin_id_serializes_as_bare_string() {
        let id = PluginId("dlna".into());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dlna\"");

        let id2 = id.clone();
        assert_eq!(id, id2);
    }
}
