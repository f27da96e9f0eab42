// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits for the service's external collaborators.

pub mod generator;
pub mod mailer;
pub mod store;

pub use generator::ContentGenerator;
pub use mailer::Mailer;
pub use store::BookingStore;
