// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record store trait for the durable booking collection.

use async_trait::async_trait;

use crate::error::RevshareError;
use crate::types::{Booking, Enrichment, SentFlag};

/// The durable collection holding all booking records.
///
/// Records are appended by intake and mutated only through monotonic
/// flag sets and one-time enrichment attachment; nothing in this
/// subsystem deletes them. Backend read and write failures propagate
/// to the caller -- a silently empty read is indistinguishable from
/// data loss.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Every stored record, in insertion order.
    async fn list_all(&self) -> Result<Vec<Booking>, RevshareError>;

    /// Add one record. Write failure propagates: booking durability is
    /// the one hard guarantee this service makes.
    async fn append(&self, booking: &Booking) -> Result<(), RevshareError>;

    /// Set a sent flag on the record with the given id.
    /// Silent no-op when the id is unknown.
    async fn mark_sent(&self, id: &str, flag: SentFlag) -> Result<(), RevshareError>;

    /// Attach the enrichment payload to the record with the given id.
    /// Silent no-op when the id is unknown.
    async fn attach_enrichment(
        &self,
        id: &str,
        enrichment: &Enrichment,
    ) -> Result<(), RevshareError>;

    /// Fetch one record by id.
    async fn get(&self, id: &str) -> Result<Option<Booking>, RevshareError>;
}
