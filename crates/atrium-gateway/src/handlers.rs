// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for dashboard page delivery.
//!
//! Handles GET /web/ConfigurationPage, GET /web/ConfigurationPages, and the
//! public health endpoint.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use atrium_plugin::ListFilter;

use crate::server::DashboardState;

/// Listing responses carry an explicit charset per the dashboard contract.
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Query parameters for GET /web/ConfigurationPage.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Name of the page to resolve.
    pub name: String,
}

/// Query parameters for GET /web/ConfigurationPages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Tri-state menu filter; absent applies no filtering.
    #[serde(default)]
    pub enable_in_main_menu: Option<bool>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// GET /web/ConfigurationPage?name=<page>
///
/// Serves the exact stored bytes of the named page with the MIME type
/// declared by its descriptor. Unknown names and unreadable resources are
/// both a plain 404: a broken plugin resource is not distinguishable from a
/// typo'd name at this layer, and never becomes a 500.
pub async fn get_configuration_page(
    State(state): State<DashboardState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.resolver.resolve(&query.name).await {
        Some(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content.mime_type)],
            content.bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// GET /web/ConfigurationPages?enableInMainMenu=<true|false>
///
/// Returns the page metadata listing as a top-level JSON array, filtered by
/// the optional menu flag. An empty registry or a non-matching filter yields
/// `[]`, never an error.
pub async fn get_configuration_pages(
    State(state): State<DashboardState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let entries = state.listing.list(ListFilter {
        enable_in_main_menu: query.enable_in_main_menu,
    });

    match serde_json::to_vec(&entries) {
        Ok(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, JSON_UTF8)], body).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to serialize page listing");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health(State(state): State<DashboardState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_defaults_to_no_filter() {
        let query = ListingQuery::default();
        assert!(query.enable_in_main_menu.is_none());
    }

    #[test]
    fn listing_query_deserializes_camel_case() {
        let query: ListingQuery = serde_json::from_str(r#"{"enableInMainMenu": true}"#).unwrap();
        assert_eq!(query.enable_in_main_menu, Some(true));

        let query: ListingQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert!(query.enable_in_main_menu.is_none());
    }

    #[test]
    fn page_query_requires_name() {
        assert!(serde_json::from_str::<PageQuery>(r#"{}"#).is_err());
        let query: PageQuery = serde_json::from_str(r#"{"name": "dlna"}"#).unwrap();
        assert_eq!(query.name, "dlna");
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_secs: 42,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_secs\":42"));
    }
}
