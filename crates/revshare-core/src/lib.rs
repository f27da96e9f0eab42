// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the RevShare booking service.
//!
//! This crate provides the error type, booking domain types, and the
//! adapter traits (record store, content generator, mail notifier)
//! implemented elsewhere in the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RevshareError;
pub use traits::{BookingStore, ContentGenerator, Mailer};
pub use types::{
    Booking, DealSize, Enrichment, ReminderKind, SentFlag, TimeSlot, meeting_instant,
};
