// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Atrium integration tests.
//!
//! Provides fixture page resources and descriptor builders for fast,
//! deterministic, CI-runnable tests without a real plugins directory.
//!
//! # Components
//!
//! - [`BrokenResource`] - a resource that always fails to open
//! - [`html_page`] / [`json_page`] / [`broken_page`] - page descriptor builders
//! - [`plugin`] - plugin descriptor builder

pub mod fixtures;

pub use fixtures::{broken_page, html_page, json_page, plugin, BrokenResource};
