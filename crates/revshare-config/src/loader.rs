// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./revshare.toml` > `~/.config/revshare/revshare.toml` > `/etc/revshare/revshare.toml`
//! with environment variable overrides via `REVSHARE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::RevshareConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/revshare/revshare.toml` (system-wide)
/// 3. `~/.config/revshare/revshare.toml` (user XDG config)
/// 4. `./revshare.toml` (local directory)
/// 5. `REVSHARE_*` environment variables
pub fn load_config() -> Result<RevshareConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<RevshareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RevshareConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RevshareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RevshareConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RevshareConfig::default()))
        .merge(Toml::file("/etc/revshare/revshare.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("revshare/revshare.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("revshare.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `REVSHARE_STORAGE_KV_REST_URL`
/// must map to `storage.kv_rest_url`, not `storage.kv.rest.url`.
fn env_provider() -> Env {
    Env::prefixed("REVSHARE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: REVSHARE_EMAIL_SMTP_HOST -> "email_smtp_host"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("email_", "email.", 1)
            .replacen("scheduler_", "scheduler.", 1)
            .replacen("booking_", "booking.", 1);
        mapped.into()
    })
}
