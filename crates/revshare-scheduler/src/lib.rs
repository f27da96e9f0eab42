// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reminder scheduling for the RevShare booking service.
//!
//! [`windows::due_reminders`] is the pure decision function; the
//! [`ReminderRunner`] applies it across the store and sends whatever is
//! due. Invocations are stateless: the persisted flags on each booking
//! are the only memory, and the next external trigger is the retry
//! mechanism.

pub mod runner;
pub mod windows;

pub use runner::{ReminderRunner, RunSummary};
pub use windows::due_reminders;
