// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock booking store with failure injection.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use revshare_core::types::{Booking, Enrichment, SentFlag};
use revshare_core::{BookingStore, RevshareError};

/// In-memory [`BookingStore`] for tests, with switchable read/write
/// failure modes.
#[derive(Default)]
pub struct MockBookingStore {
    bookings: Mutex<Vec<Booking>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the given records.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            ..Self::default()
        }
    }

    /// Make every read operation fail until cleared.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every write operation fail until cleared.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored records.
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.lock().await.clone()
    }

    fn read_error(&self) -> Result<(), RevshareError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RevshareError::Storage {
                source: "injected read failure".into(),
            });
        }
        Ok(())
    }

    fn write_error(&self) -> Result<(), RevshareError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RevshareError::Storage {
                source: "injected write failure".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BookingStore for MockBookingStore {
    async fn list_all(&self) -> Result<Vec<Booking>, RevshareError> {
        self.read_error()?;
        Ok(self.bookings.lock().await.clone())
    }

    async fn append(&self, booking: &Booking) -> Result<(), RevshareError> {
        self.write_error()?;
        self.bookings.lock().await.push(booking.clone());
        Ok(())
    }

    async fn mark_sent(&self, id: &str, flag: SentFlag) -> Result<(), RevshareError> {
        self.write_error()?;
        let mut bookings = self.bookings.lock().await;
        if let Some(record) = bookings.iter_mut().find(|b| b.id == id) {
            record.mark(flag);
        }
        Ok(())
    }

    async fn attach_enrichment(
        &self,
        id: &str,
        enrichment: &Enrichment,
    ) -> Result<(), RevshareError> {
        self.write_error()?;
        let mut bookings = self.bookings.lock().await;
        if let Some(record) = bookings.iter_mut().find(|b| b.id == id) {
            record.enrichment = Some(enrichment.clone());
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, RevshareError> {
        self.read_error()?;
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }
}
