// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the RevShare booking service.
//!
//! Exposes the booking intake and listing endpoints, the cron-triggered
//! reminder run, the manual reminder send, the lead-magnet flow, and
//! the rotating topic-of-the-day. Handlers talk to the rest of the
//! workspace through the adapter traits in `revshare-core`, so the
//! server composes identically over the KV store or the in-memory
//! development fallback.

pub mod auth;
pub mod handlers;
pub mod intake;
pub mod server;

pub use auth::CronAuth;
pub use server::{AppState, GatewaySettings, ServerConfig, build_router, offset_from_hours, start_server};
