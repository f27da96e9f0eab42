// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `revshare serve` command implementation.
//!
//! Wires the configured adapters (booking store, Anthropic content
//! generator, SMTP mailer) into the gateway and serves until a
//! shutdown signal arrives. When `scheduler.interval_secs` is set, an
//! in-process timer runs the reminder pass alongside the HTTP cron
//! trigger.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use revshare_config::RevshareConfig;
use revshare_content::AnthropicGenerator;
use revshare_core::RevshareError;
use revshare_email::SmtpMailer;
use revshare_gateway::{AppState, GatewaySettings, ServerConfig, offset_from_hours, start_server};
use revshare_scheduler::ReminderRunner;
use revshare_store::build_store;

/// Runs the `revshare serve` command.
pub async fn run_serve(config: RevshareConfig) -> Result<(), RevshareError> {
    init_tracing(&config.service.log_level);

    info!("starting revshare serve");

    let state = build_state(&config)?;

    // Optional in-process reminder interval, in addition to the
    // externally triggered cron endpoint.
    let interval_task = config.scheduler.interval_secs.map(|secs| {
        let runner = ReminderRunner::new(
            state.store.clone(),
            state.generator.clone(),
            state.mailer.clone(),
        );
        info!(interval_secs = secs, "in-process reminder interval enabled");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(secs));
            // Skip the first immediate tick.
            interval.tick().await;

            loop {
                interval.tick().await;
                match runner.run(Utc::now()).await {
                    Ok(summary) => debug!(
                        processed = summary.processed,
                        one_day = summary.one_day_reminders,
                        two_hour = summary.two_hour_reminders,
                        thirty_min = summary.thirty_min_reminders,
                        errors = summary.errors,
                        "interval reminder pass complete"
                    ),
                    Err(e) => warn!(error = %e, "interval reminder pass failed"),
                }
            }
        })
    });

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    tokio::select! {
        result = start_server(&server_config, state) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    if let Some(handle) = interval_task {
        handle.abort();
    }

    info!("revshare serve shutdown complete");
    Ok(())
}

/// Build the gateway state from configuration.
///
/// The store falls back to the in-memory development instance when no
/// KV backend is configured; the generator and mailer are required.
pub(crate) fn build_state(config: &RevshareConfig) -> Result<AppState, RevshareError> {
    let store = build_store(&config.storage)?;

    let generator = AnthropicGenerator::new(config).map_err(|e| {
        error!(error = %e, "failed to initialize Anthropic content generator");
        eprintln!(
            "error: Anthropic API key required. Set anthropic.api_key in config or the ANTHROPIC_API_KEY environment variable."
        );
        e
    })?;

    let mailer = SmtpMailer::new(&config.email).map_err(|e| {
        error!(error = %e, "failed to initialize SMTP mailer");
        eprintln!(
            "error: SMTP credentials required. Set email.username and email.password in config."
        );
        e
    })?;
    let operator_email = mailer.operator_email().to_string();

    let business_offset = offset_from_hours(config.booking.utc_offset_hours).ok_or_else(|| {
        RevshareError::Config(format!(
            "booking.utc_offset_hours out of range: {}",
            config.booking.utc_offset_hours
        ))
    })?;

    Ok(AppState::new(
        store,
        Arc::new(generator),
        Arc::new(mailer),
        GatewaySettings {
            operator_email,
            cron_secret: config.scheduler.cron_secret.clone(),
            business_offset,
            meeting_link: config.booking.meeting_link.clone(),
            booking_url: config.booking.booking_url.clone(),
        },
    ))
}

/// Initializes the tracing subscriber with the given log level.
pub(crate) fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("revshare={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
