// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./atrium.toml` > `~/.config/atrium/atrium.toml`
//! > `/etc/atrium/atrium.toml`, with environment variable overrides via the
//! `ATRIUM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AtriumConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/atrium/atrium.toml` (system-wide)
/// 3. `~/.config/atrium/atrium.toml` (user XDG config)
/// 4. `./atrium.toml` (local directory)
/// 5. `ATRIUM_*` environment variables
pub fn load_config() -> Result<AtriumConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtriumConfig::default()))
        .merge(Toml::file("/etc/atrium/atrium.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("atrium/atrium.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("atrium.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AtriumConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtriumConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AtriumConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtriumConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that key names which
/// themselves contain underscores stay unambiguous: `ATRIUM_DASHBOARD_LOG_LEVEL`
/// must map to `dashboard.log_level`, not `dashboard.log.level`.
fn env_provider() -> Env {
    Env::prefixed("ATRIUM_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: ATRIUM_SERVER_PORT -> "server_port"
        let mapped = key
            .as_str()
            .replacen("dashboard_", "dashboard.", 1)
            .replacen("server_", "server.", 1)
            .replacen("plugins_", "plugins.", 1);
        mapped.into()
    })
}
