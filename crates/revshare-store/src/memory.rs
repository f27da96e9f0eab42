// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory booking store for local development.
//!
//! Same functional contract as the KV store, no cross-process
//! durability. Constructed explicitly and injected -- never a
//! module-level global -- so its lifetime is the process or test that
//! owns it. Not safe under concurrent writers from multiple processes,
//! acceptable for local testing only.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use revshare_core::types::{Booking, Enrichment, SentFlag};
use revshare_core::{BookingStore, RevshareError};

/// Development fallback store holding bookings in process memory.
#[derive(Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn list_all(&self) -> Result<Vec<Booking>, RevshareError> {
        Ok(self.bookings.lock().await.clone())
    }

    async fn append(&self, booking: &Booking) -> Result<(), RevshareError> {
        let mut bookings = self.bookings.lock().await;
        bookings.push(booking.clone());
        debug!(booking_id = %booking.id, total = bookings.len(), "booking appended (dev store)");
        Ok(())
    }

    async fn mark_sent(&self, id: &str, flag: SentFlag) -> Result<(), RevshareError> {
        let mut bookings = self.bookings.lock().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(record) => record.mark(flag),
            None => warn!(booking_id = %id, "mark_sent skipped: no booking with this id"),
        }
        Ok(())
    }

    async fn attach_enrichment(
        &self,
        id: &str,
        enrichment: &Enrichment,
    ) -> Result<(), RevshareError> {
        let mut bookings = self.bookings.lock().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(record) => record.enrichment = Some(enrichment.clone()),
            None => warn!(booking_id = %id, "attach_enrichment skipped: no booking with this id"),
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, RevshareError> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }
}
