// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared-secret check for the cron trigger endpoint.
//!
//! When a secret is configured, the trigger requires
//! `Authorization: Bearer <secret>`. When none is configured the
//! endpoint is open, matching the original deployment behavior; any
//! public deployment should set `scheduler.cron_secret`.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::handlers::ErrorResponse;

/// Cron trigger authentication configuration.
#[derive(Clone)]
pub struct CronAuth {
    /// Expected shared secret. `None` leaves the endpoint open.
    pub secret: Option<String>,
}

impl std::fmt::Debug for CronAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronAuth")
            .field("secret", &self.secret.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Middleware that validates the cron shared secret when one is set.
pub async fn require_cron_secret(
    State(auth): State<CronAuth>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &auth.secret {
        let bearer = request
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        if bearer != Some(expected.as_str()) {
            warn!("cron trigger rejected: missing or invalid secret");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response();
        }
    }

    next.run(request).await
}
