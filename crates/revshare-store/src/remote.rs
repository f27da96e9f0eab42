// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! KV-backed booking store.
//!
//! The whole collection is serialized as one JSON array under a single
//! key; every mutation is a read-modify-write of that array. An async
//! mutex serializes mutations within the process so two in-process
//! writers cannot interleave. Cross-process writers can still race --
//! acceptable at this volume (a handful of bookings per day).

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use revshare_config::model::StorageConfig;
use revshare_core::types::{Booking, Enrichment, SentFlag};
use revshare_core::{BookingStore, RevshareError};

use crate::kv::KvClient;

/// The single key holding the serialized booking collection.
const BOOKINGS_KEY: &str = "bookings";

/// Booking store backed by the key-value REST service.
pub struct KvBookingStore {
    kv: KvClient,
    /// Serializes read-modify-write sequences within this process.
    write_lock: Mutex<()>,
}

impl KvBookingStore {
    /// Create a store from configuration. Requires both the REST URL
    /// and token; the caller falls back to [`crate::MemoryBookingStore`]
    /// when the backend is not configured.
    pub fn new(config: &StorageConfig) -> Result<Self, RevshareError> {
        let (Some(url), Some(token)) = (&config.kv_rest_url, &config.kv_rest_token) else {
            return Err(RevshareError::Config(
                "storage.kv_rest_url and storage.kv_rest_token are required for the KV store"
                    .into(),
            ));
        };
        Ok(Self {
            kv: KvClient::new(url, token)?,
            write_lock: Mutex::new(()),
        })
    }

    #[cfg(test)]
    fn with_client(kv: KvClient) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<Booking>, RevshareError> {
        match self.kv.get(BOOKINGS_KEY).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| RevshareError::Storage {
                source: format!("malformed booking collection: {e}").into(),
            }),
        }
    }

    async fn save(&self, bookings: &[Booking]) -> Result<(), RevshareError> {
        let raw = serde_json::to_string(bookings).map_err(|e| RevshareError::Storage {
            source: Box::new(e),
        })?;
        self.kv.set(BOOKINGS_KEY, &raw).await
    }

    /// Apply `mutate` to the record with the given id and write the
    /// collection back. No-op when the id is unknown.
    async fn update_record<F>(&self, id: &str, mutate: F) -> Result<(), RevshareError>
    where
        F: FnOnce(&mut Booking),
    {
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.load().await?;
        let Some(record) = bookings.iter_mut().find(|b| b.id == id) else {
            warn!(booking_id = %id, "update skipped: no booking with this id");
            return Ok(());
        };
        mutate(record);
        self.save(&bookings).await
    }
}

#[async_trait]
impl BookingStore for KvBookingStore {
    async fn list_all(&self) -> Result<Vec<Booking>, RevshareError> {
        self.load().await
    }

    async fn append(&self, booking: &Booking) -> Result<(), RevshareError> {
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.load().await?;
        bookings.push(booking.clone());
        self.save(&bookings).await?;
        debug!(booking_id = %booking.id, total = bookings.len(), "booking appended");
        Ok(())
    }

    async fn mark_sent(&self, id: &str, flag: SentFlag) -> Result<(), RevshareError> {
        self.update_record(id, |b| b.mark(flag)).await
    }

    async fn attach_enrichment(
        &self,
        id: &str,
        enrichment: &Enrichment,
    ) -> Result<(), RevshareError> {
        let enrichment = enrichment.clone();
        self.update_record(id, move |b| b.enrichment = Some(enrichment))
            .await
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, RevshareError> {
        Ok(self.load().await?.into_iter().find(|b| b.id == id))
    }
}
