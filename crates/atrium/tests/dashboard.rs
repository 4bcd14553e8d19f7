// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-level tests for dashboard configuration-page delivery.
//!
//! Each test builds an isolated page registry from in-memory fixtures and
//! drives the real router with tower's oneshot. Tests are independent and
//! order-insensitive.

use std::sync::Arc;

use atrium_gateway::{router, DashboardState};
use atrium_plugin::{PageListingEntry, PageRegistry, PluginDescriptor};
use atrium_test_utils::{broken_page, html_page, json_page, plugin};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

const TEST_PAGE_HTML: &str = "<!DOCTYPE html><html><body>Test Plugin</body></html>";

fn state_with(plugins: Vec<PluginDescriptor>) -> DashboardState {
    DashboardState::new(Arc::new(PageRegistry::build(plugins)))
}

fn default_plugins() -> Vec<PluginDescriptor> {
    vec![plugin(
        "test-plugin",
        "Test Plugin",
        vec![
            html_page("TestPlugin", "test-plugin", true, TEST_PAGE_HTML),
            broken_page("BrokenPage", "test-plugin"),
        ],
    )]
}

async fn get(state: DashboardState, uri: &str) -> Response {
    router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

// ---- GET /web/ConfigurationPage ----

#[tokio::test]
async fn configuration_page_non_existing_page_not_found() {
    let response = get(
        state_with(default_plugins()),
        "/web/ConfigurationPage?name=ThisPageDoesntExist",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn configuration_page_existing_page_serves_exact_bytes() {
    let response = get(
        state_with(default_plugins()),
        "/web/ConfigurationPage?name=TestPlugin",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html"
    );
    assert_eq!(body_bytes(response).await, TEST_PAGE_HTML.as_bytes());
}

#[tokio::test]
async fn configuration_page_broken_page_not_found() {
    let response = get(
        state_with(default_plugins()),
        "/web/ConfigurationPage?name=BrokenPage",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn configuration_page_json_kind_served_as_json() {
    let plugins = vec![plugin(
        "reports",
        "Reports",
        vec![json_page("report-config", "reports", false, r#"{"rows": 20}"#)],
    )];
    let response = get(state_with(plugins), "/web/ConfigurationPage?name=report-config").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_bytes(response).await, br#"{"rows": 20}"#);
}

#[tokio::test]
async fn configuration_page_missing_name_parameter_is_bad_request() {
    let response = get(state_with(default_plugins()), "/web/ConfigurationPage").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn configuration_page_duplicate_name_first_plugin_wins() {
    let plugins = vec![
        plugin(
            "first",
            "First",
            vec![html_page("shared", "first", false, "<html>first</html>")],
        ),
        plugin(
            "second",
            "Second",
            vec![html_page("shared", "second", false, "<html>second</html>")],
        ),
    ];
    let response = get(state_with(plugins), "/web/ConfigurationPage?name=shared").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<html>first</html>");
}

// ---- GET /web/ConfigurationPages ----

#[tokio::test]
async fn configuration_pages_no_params_lists_all_pages() {
    let response = get(state_with(default_plugins()), "/web/ConfigurationPages").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );

    let body = body_bytes(response).await;
    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["TestPlugin", "BrokenPage"]);
}

#[tokio::test]
async fn configuration_pages_listing_includes_broken_pages() {
    // The listing is pure metadata; whether a resource would actually open
    // is only discovered on resolve.
    let response = get(state_with(default_plugins()), "/web/ConfigurationPages").await;
    let body = body_bytes(response).await;
    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    assert!(entries.iter().any(|e| e.name == "BrokenPage"));
}

#[tokio::test]
async fn configuration_pages_menu_filter_keeps_flagged_subset() {
    let response = get(
        state_with(default_plugins()),
        "/web/ConfigurationPages?enableInMainMenu=true",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "TestPlugin");
    assert!(entries[0].enable_in_main_menu);
}

#[tokio::test]
async fn configuration_pages_false_filter_keeps_unflagged_subset() {
    let response = get(
        state_with(default_plugins()),
        "/web/ConfigurationPages?enableInMainMenu=false",
    )
    .await;

    let body = body_bytes(response).await;
    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "BrokenPage");
}

#[tokio::test]
async fn configuration_pages_filter_with_no_match_returns_empty_array() {
    let plugins = vec![plugin(
        "test-plugin",
        "Test Plugin",
        vec![html_page("TestPlugin", "test-plugin", false, TEST_PAGE_HTML)],
    )];
    let response = get(
        state_with(plugins),
        "/web/ConfigurationPages?enableInMainMenu=true",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn configuration_pages_empty_registry_returns_empty_array() {
    let response = get(state_with(Vec::new()), "/web/ConfigurationPages").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn configuration_pages_listing_round_trips_through_json() {
    let response = get(state_with(default_plugins()), "/web/ConfigurationPages").await;
    let body = body_bytes(response).await;

    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    let reserialized = serde_json::to_vec(&entries).unwrap();
    let reparsed: Vec<PageListingEntry> = serde_json::from_slice(&reserialized).unwrap();
    assert_eq!(reparsed, entries);
}

#[tokio::test]
async fn configuration_pages_duplicate_name_listed_once_for_first_plugin() {
    let plugins = vec![
        plugin(
            "first",
            "First",
            vec![html_page("shared", "first", true, "<html>first</html>")],
        ),
        plugin(
            "second",
            "Second",
            vec![html_page("shared", "second", true, "<html>second</html>")],
        ),
    ];
    let response = get(state_with(plugins), "/web/ConfigurationPages").await;
    let body = body_bytes(response).await;

    let entries: Vec<PageListingEntry> = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].plugin_id.0, "first");
}
