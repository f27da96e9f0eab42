// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail notifier trait.

use async_trait::async_trait;

use crate::error::RevshareError;
use crate::types::OutgoingEmail;

/// SMTP-backed mail delivery.
///
/// A single attempt per call: no retry, no queueing, no bounce
/// handling. Callers log failures and decide whether to continue.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), RevshareError>;
}
