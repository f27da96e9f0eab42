// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as paired KV credentials and sane UTC offsets.

use crate::diagnostic::ConfigError;
use crate::model::RevshareConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RevshareConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty and looks like an IP or hostname.
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    // KV credentials must come as a pair.
    if config.storage.kv_rest_url.is_some() != config.storage.kv_rest_token.is_some() {
        errors.push(ConfigError::Validation {
            message: "storage.kv_rest_url and storage.kv_rest_token must be set together"
                .to_string(),
        });
    }

    if let Some(url) = &config.storage.kv_rest_url
        && !(url.starts_with("http://") || url.starts_with("https://"))
    {
        errors.push(ConfigError::Validation {
            message: format!("storage.kv_rest_url `{url}` must start with http:// or https://"),
        });
    }

    if config.anthropic.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.max_tokens must be greater than zero".to_string(),
        });
    }

    if config.email.smtp_host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "email.smtp_host must not be empty".to_string(),
        });
    }

    // UTC offsets beyond this range do not exist.
    let offset = config.booking.utc_offset_hours;
    if !(-12..=14).contains(&(offset as i32)) {
        errors.push(ConfigError::Validation {
            message: format!("booking.utc_offset_hours must be within -12..=14, got {offset}"),
        });
    }

    if let Some(interval) = config.scheduler.interval_secs
        && interval == 0
    {
        errors.push(ConfigError::Validation {
            message: "scheduler.interval_secs must be greater than zero when set".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = RevshareConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn kv_url_without_token_fails_validation() {
        let mut config = RevshareConfig::default();
        config.storage.kv_rest_url = Some("https://kv.example.com".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("set together"))
        ));
    }

    #[test]
    fn non_http_kv_url_fails_validation() {
        let mut config = RevshareConfig::default();
        config.storage.kv_rest_url = Some("redis://kv.example.com".to_string());
        config.storage.kv_rest_token = Some("token".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("kv_rest_url"))
        ));
    }

    #[test]
    fn out_of_range_offset_fails_validation() {
        let mut config = RevshareConfig::default();
        config.booking.utc_offset_hours = 20;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("utc_offset_hours"))
        ));
    }

    #[test]
    fn zero_interval_fails_validation() {
        let mut config = RevshareConfig::default();
        config.scheduler.interval_secs = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("interval_secs"))
        ));
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = RevshareConfig::default();
        config.server.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("server.host"))
        ));
    }
}
