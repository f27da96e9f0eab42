// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content generator trait (LLM-backed personalization).

use async_trait::async_trait;

use crate::error::RevshareError;
use crate::types::{
    Booking, DealSize, Enrichment, LeadMagnetContent, ReminderCopy, ReminderKind, Topic,
};

/// LLM-backed research and copy generation.
///
/// Every operation may fail (network, parse); callers must treat the
/// output as optional enrichment and fall back to static behavior.
/// Nothing downstream may hard-depend on a successful generation.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Research the booker's company and produce the personalization
    /// payload attached to a new booking.
    async fn booking_content(
        &self,
        website: &str,
        deal_size: DealSize,
        challenge: Option<&str>,
    ) -> Result<Enrichment, RevshareError>;

    /// Personalized subject and body for a reminder email. Callers
    /// fall back to the static templates on failure.
    async fn reminder_copy(
        &self,
        kind: ReminderKind,
        booking: &Booking,
    ) -> Result<ReminderCopy, RevshareError>;

    /// Personalized lead-magnet guide for the given company domain and
    /// today's topic.
    async fn lead_magnet(
        &self,
        email: &str,
        domain: &str,
        topic: &Topic,
    ) -> Result<LeadMagnetContent, RevshareError>;
}
