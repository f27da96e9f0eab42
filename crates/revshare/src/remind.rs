// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `revshare remind` command implementation.
//!
//! One reminder pass against the configured store and mailer, with the
//! run summary printed as JSON. Useful from a system cron entry or for
//! operator spot checks; the serve-mode HTTP trigger covers the same
//! pass for platform schedulers.

use chrono::Utc;
use tracing::info;

use revshare_config::RevshareConfig;
use revshare_core::RevshareError;
use revshare_scheduler::ReminderRunner;

/// Runs the `revshare remind` command.
pub async fn run_remind(config: RevshareConfig) -> Result<(), RevshareError> {
    crate::serve::init_tracing(&config.service.log_level);

    let state = crate::serve::build_state(&config)?;
    let runner = ReminderRunner::new(state.store, state.generator, state.mailer);

    let summary = runner.run(Utc::now()).await?;
    info!(
        processed = summary.processed,
        errors = summary.errors,
        "reminder pass complete"
    );

    let rendered = serde_json::to_string_pretty(&summary)
        .map_err(|e| RevshareError::Internal(format!("failed to render run summary: {e}")))?;
    println!("{rendered}");

    Ok(())
}
