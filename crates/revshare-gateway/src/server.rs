// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the service.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use chrono::FixedOffset;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use revshare_core::{BookingStore, ContentGenerator, Mailer, RevshareError};

use crate::auth::{CronAuth, require_cron_secret};
use crate::handlers;

/// Request-handling settings, mirrored from `revshare-config` so the
/// gateway crate does not depend on the config crate.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Inbox that receives operator booking notifications.
    pub operator_email: String,
    /// Shared secret for the cron trigger. `None` leaves it open.
    pub cron_secret: Option<String>,
    /// Business timezone used to pin meeting instants and pick the
    /// topic of the day.
    pub business_offset: FixedOffset,
    /// Video-call link included in confirmations and calendar entries.
    pub meeting_link: Option<String>,
    /// Public booking-page URL used in lead-magnet calls to action.
    pub booking_url: String,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookingStore>,
    pub generator: Arc<dyn ContentGenerator>,
    pub mailer: Arc<dyn Mailer>,
    pub settings: GatewaySettings,
    /// Process start time for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BookingStore>,
        generator: Arc<dyn ContentGenerator>,
        mailer: Arc<dyn Mailer>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            store,
            generator,
            mailer,
            settings,
            started_at: Instant::now(),
        }
    }
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Convert a whole-hour UTC offset into a [`FixedOffset`].
///
/// Returns `None` for offsets outside the -12..=14 range that exists
/// on the planet.
pub fn offset_from_hours(hours: i8) -> Option<FixedOffset> {
    if !(-12..=14).contains(&hours) {
        return None;
    }
    FixedOffset::east_opt(i32::from(hours) * 3600)
}

/// Build the service router over the given state.
pub fn build_router(state: AppState) -> Router {
    let cron_auth = CronAuth {
        secret: state.settings.cron_secret.clone(),
    };

    // The cron trigger carries its own shared-secret check; everything
    // else is public, matching the original deployment surface.
    let cron_routes = Router::new()
        .route("/api/cron/send-reminders", get(handlers::run_reminders))
        .route_layer(axum_middleware::from_fn_with_state(
            cron_auth,
            require_cron_secret,
        ))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route(
            "/api/bookings",
            post(handlers::create_booking).get(handlers::list_bookings),
        )
        .route("/api/send-reminders", post(handlers::send_manual_reminder))
        .route("/api/lead-magnet", post(handlers::send_lead_magnet))
        .route("/api/todays-topic", get(handlers::todays_topic))
        .route("/health", get(handlers::health))
        .with_state(state);

    Router::new()
        .merge(cron_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the task is aborted.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), RevshareError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RevshareError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| RevshareError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
