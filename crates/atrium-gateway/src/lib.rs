// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP delivery layer for the Atrium dashboard.
//!
//! Translates page-registry lookups into HTTP responses: exact page bytes
//! with the descriptor's MIME type, metadata listings as top-level JSON
//! arrays, and a plain 404 for anything unknown or unreadable. The gateway
//! holds only an immutable registry behind shared state; every request is
//! independent and requires no cross-request coordination.

pub mod handlers;
pub mod server;

pub use server::{router, start_server, DashboardState, ServerConfig};
