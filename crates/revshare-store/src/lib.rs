// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking record store implementations.
//!
//! [`KvBookingStore`] persists the whole collection as one JSON array
//! under a single key in an external key-value REST service.
//! [`MemoryBookingStore`] is the injected in-process fallback for local
//! development.

pub mod kv;
pub mod memory;
pub mod remote;

pub use kv::KvClient;
pub use memory::MemoryBookingStore;
pub use remote::KvBookingStore;

use std::sync::Arc;

use revshare_config::model::StorageConfig;
use revshare_core::{BookingStore, RevshareError};
use tracing::info;

/// Build the configured store: KV-backed when credentials are present,
/// in-memory otherwise.
pub fn build_store(config: &StorageConfig) -> Result<Arc<dyn BookingStore>, RevshareError> {
    if config.has_remote_backend() {
        info!("using KV-backed booking store");
        Ok(Arc::new(KvBookingStore::new(config)?))
    } else {
        info!("no KV backend configured, using in-memory booking store (no durability)");
        Ok(Arc::new(MemoryBookingStore::new()))
    }
}
