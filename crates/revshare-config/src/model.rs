// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the RevShare booking service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level RevShare configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RevshareConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Anthropic API settings for the content generator.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Booking record store backend.
    #[serde(default)]
    pub storage: StorageConfig,

    /// SMTP mail delivery settings.
    #[serde(default)]
    pub email: EmailConfig,

    /// Reminder scheduler trigger settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Booking semantics (business timezone, meeting link).
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name used in email senders and logs.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "revshare".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Anthropic API key. `None` requires the environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for research and copy generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_version: default_api_version(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

/// Booking record store configuration.
///
/// When the REST URL or token is absent the service falls back to the
/// in-memory development store, which has no cross-process durability.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Base URL of the key-value REST service.
    #[serde(default)]
    pub kv_rest_url: Option<String>,

    /// Bearer token for the key-value REST service.
    #[serde(default)]
    pub kv_rest_token: Option<String>,
}

impl StorageConfig {
    /// Whether a remote KV backend is fully configured.
    pub fn has_remote_backend(&self) -> bool {
        self.kv_rest_url.is_some() && self.kv_rest_token.is_some()
    }
}

/// SMTP mail delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP account username (also the From address).
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP account password. `None` requires the environment variable.
    #[serde(default)]
    pub password: Option<String>,

    /// Display name on outgoing mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Inbox that receives operator booking notifications.
    /// Defaults to `username` when unset.
    #[serde(default)]
    pub operator_email: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            username: None,
            password: None,
            from_name: default_from_name(),
            operator_email: None,
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_from_name() -> String {
    "RevShare".to_string()
}

/// Reminder scheduler trigger configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Shared secret required by the cron trigger endpoint.
    /// When unset the endpoint is open (parity with the original
    /// deployment; set this in any public deployment).
    #[serde(default)]
    pub cron_secret: Option<String>,

    /// When set, the binary also runs the reminder pass on this
    /// in-process interval in addition to the HTTP trigger.
    #[serde(default)]
    pub interval_secs: Option<u64>,
}

/// Booking semantics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// UTC offset (whole hours) of the business timezone used to pin
    /// meeting instants. Default -5 (EST).
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i8,

    /// Video-call link included in confirmations and calendar entries.
    #[serde(default)]
    pub meeting_link: Option<String>,

    /// Public booking-page URL used in lead-magnet calls to action.
    #[serde(default = "default_booking_url")]
    pub booking_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            meeting_link: None,
            booking_url: default_booking_url(),
        }
    }
}

fn default_utc_offset_hours() -> i8 {
    -5
}

fn default_booking_url() -> String {
    "https://revshare.example.com/book".to_string()
}
