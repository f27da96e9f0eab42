// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal HTTP client for an Upstash-style key-value REST service.
//!
//! The service exposes `GET {base}/get/{key}` and `POST {base}/set/{key}`
//! with bearer-token auth; values are opaque strings.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use revshare_core::RevshareError;

/// Response envelope for `GET /get/{key}`.
#[derive(Debug, Deserialize)]
struct GetResponse {
    /// The stored value, or `null` when the key does not exist.
    result: Option<String>,
}

/// HTTP client for the key-value REST service.
#[derive(Debug, Clone)]
pub struct KvClient {
    client: reqwest::Client,
    base_url: String,
}

impl KvClient {
    /// Creates a new KV client with bearer-token auth.
    pub fn new(base_url: &str, token: &str) -> Result<Self, RevshareError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                RevshareError::Config(format!("invalid KV token header value: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RevshareError::Storage {
                source: Box::new(e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the value stored under `key`, or `None` when absent.
    pub async fn get(&self, key: &str) -> Result<Option<String>, RevshareError> {
        let url = format!("{}/get/{key}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RevshareError::Storage {
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RevshareError::Storage {
                source: format!("KV get `{key}` returned {status}: {body}").into(),
            });
        }

        let envelope: GetResponse =
            response.json().await.map_err(|e| RevshareError::Storage {
                source: Box::new(e),
            })?;
        debug!(key, present = envelope.result.is_some(), "KV get");
        Ok(envelope.result)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), RevshareError> {
        let url = format!("{}/set/{key}", self.base_url);
        let response = self
            .client
            .post(&url)
            .body(value.to_string())
            .send()
            .await
            .map_err(|e| RevshareError::Storage {
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RevshareError::Storage {
                source: format!("KV set `{key}` returned {status}: {body}").into(),
            });
        }

        debug!(key, bytes = value.len(), "KV set");
        Ok(())
    }
}
