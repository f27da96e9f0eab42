// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reminder run: scan every booking, send whatever is due, flip
//! flags on success.
//!
//! The run is stateless between invocations; the persisted flags are
//! the only memory. A failed send leaves its flag false so the next
//! trigger retries. One record's failure never aborts the batch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use revshare_core::types::{Booking, OutgoingEmail, ReminderKind};
use revshare_core::{BookingStore, ContentGenerator, Mailer, RevshareError};
use revshare_email::templates;

/// Aggregate counts for one reminder run, returned to the trigger.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub processed: usize,
    pub one_day_reminders: usize,
    pub two_hour_reminders: usize,
    pub thirty_min_reminders: usize,
    pub errors: usize,
    pub timestamp: DateTime<Utc>,
}

impl RunSummary {
    fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            processed: 0,
            one_day_reminders: 0,
            two_hour_reminders: 0,
            thirty_min_reminders: 0,
            errors: 0,
            timestamp,
        }
    }

    fn count_sent(&mut self, kind: ReminderKind) {
        match kind {
            ReminderKind::OneDay => self.one_day_reminders += 1,
            ReminderKind::TwoHour => self.two_hour_reminders += 1,
            ReminderKind::ThirtyMin => self.thirty_min_reminders += 1,
        }
    }
}

/// Executes reminder runs against the configured adapters.
pub struct ReminderRunner {
    store: Arc<dyn BookingStore>,
    generator: Arc<dyn ContentGenerator>,
    mailer: Arc<dyn Mailer>,
}

impl ReminderRunner {
    pub fn new(
        store: Arc<dyn BookingStore>,
        generator: Arc<dyn ContentGenerator>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            store,
            generator,
            mailer,
        }
    }

    /// One full pass over the stored bookings at clock time `now`.
    ///
    /// A store read failure fails the run (nothing useful can happen
    /// without the records); everything past that point is isolated
    /// per record and aggregated into the summary.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, RevshareError> {
        let bookings = self.store.list_all().await?;
        let mut summary = RunSummary::new(now);

        for booking in &bookings {
            summary.processed += 1;

            for kind in crate::windows::due_reminders(booking, now) {
                match self.send_reminder(booking, kind).await {
                    Ok(()) => match self.store.mark_sent(&booking.id, kind.flag()).await {
                        Ok(()) => summary.count_sent(kind),
                        Err(e) => {
                            // The email went out but the flag write
                            // failed; the next run may re-send. Count
                            // it so the operator sees the store issue.
                            error!(error = %e, booking_id = %booking.id, kind = %kind, "failed to record sent flag");
                            summary.errors += 1;
                        }
                    },
                    Err(e) => {
                        warn!(error = %e, booking_id = %booking.id, kind = %kind, "reminder send failed");
                        summary.errors += 1;
                    }
                }
            }
        }

        info!(
            processed = summary.processed,
            one_day = summary.one_day_reminders,
            two_hour = summary.two_hour_reminders,
            thirty_min = summary.thirty_min_reminders,
            errors = summary.errors,
            "reminder run complete"
        );

        Ok(summary)
    }

    /// Build and send one reminder email.
    ///
    /// Personalized copy is attempted only for enriched bookings; any
    /// generator failure falls back to the static template.
    async fn send_reminder(
        &self,
        booking: &Booking,
        kind: ReminderKind,
    ) -> Result<(), RevshareError> {
        let date_display = booking.date.format("%A, %B %-d, %Y").to_string();

        let content = if booking.enrichment.is_some() {
            match self.generator.reminder_copy(kind, booking).await {
                Ok(copy) => templates::personalized_reminder(&copy, booking, &date_display),
                Err(e) => {
                    warn!(
                        error = %e,
                        booking_id = %booking.id,
                        "personalized reminder copy failed, falling back to static template"
                    );
                    templates::fallback_reminder(kind, booking, &date_display)
                }
            }
        } else {
            templates::fallback_reminder(kind, booking, &date_display)
        };

        self.mailer
            .send(OutgoingEmail {
                to: booking.email.clone(),
                subject: content.subject,
                html: content.html,
                attachment: None,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, TimeZone};
    use revshare_test_utils::{MockBookingStore, MockGenerator, MockMailer, booking_fixture, enrichment_fixture};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn booking_minutes_ahead(id: &str, minutes: i64) -> revshare_core::types::Booking {
        let meeting_at =
            (now() + Duration::minutes(minutes)).with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        booking_fixture(id, meeting_at)
    }

    struct Harness {
        store: Arc<MockBookingStore>,
        generator: Arc<MockGenerator>,
        mailer: Arc<MockMailer>,
        runner: ReminderRunner,
    }

    fn harness(bookings: Vec<revshare_core::types::Booking>) -> Harness {
        let store = Arc::new(MockBookingStore::with_bookings(bookings));
        let generator = Arc::new(MockGenerator::new());
        let mailer = Arc::new(MockMailer::new());
        let runner = ReminderRunner::new(store.clone(), generator.clone(), mailer.clone());
        Harness {
            store,
            generator,
            mailer,
            runner,
        }
    }

    #[tokio::test]
    async fn one_day_reminder_sends_once_and_flips_flag() {
        let h = harness(vec![booking_minutes_ahead("b-1", 24 * 60)]);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.one_day_reminders, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(h.mailer.sent_count().await, 1);

        let stored = h.store.snapshot().await;
        assert!(stored[0].one_day_reminder_sent);
        assert!(!stored[0].two_hour_reminder_sent);

        // Second consecutive run: flag now gates the window.
        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.one_day_reminders, 0);
        assert_eq!(h.mailer.sent_count().await, 1);
    }

    #[tokio::test]
    async fn double_run_is_idempotent_across_all_windows() {
        let h = harness(vec![
            booking_minutes_ahead("b-1", 24 * 60),
            booking_minutes_ahead("b-2", 120),
            booking_minutes_ahead("b-3", 30),
        ]);

        h.runner.run(now()).await.unwrap();
        let after_first = h.store.snapshot().await;

        let second = h.runner.run(now()).await.unwrap();
        let after_second = h.store.snapshot().await;

        assert_eq!(after_first, after_second);
        assert_eq!(second.one_day_reminders, 0);
        assert_eq!(second.two_hour_reminders, 0);
        assert_eq!(second.thirty_min_reminders, 0);
        assert_eq!(h.mailer.sent_count().await, 3);
    }

    #[tokio::test]
    async fn past_meeting_sends_nothing() {
        let h = harness(vec![booking_minutes_ahead("b-1", -10)]);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.one_day_reminders, 0);
        assert_eq!(summary.two_hour_reminders, 0);
        assert_eq!(summary.thirty_min_reminders, 0);
        assert_eq!(summary.errors, 0);
        assert_eq!(h.mailer.sent_count().await, 0);
    }

    #[tokio::test]
    async fn two_hour_window_does_not_send_thirty_min() {
        let h = harness(vec![booking_minutes_ahead("b-1", 120)]);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.two_hour_reminders, 1);
        assert_eq!(summary.thirty_min_reminders, 0);

        let sent = h.mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].subject.contains("2 hours"), "got: {}", sent[0].subject);
    }

    #[tokio::test]
    async fn send_failure_leaves_flag_false_and_next_run_retries() {
        let h = harness(vec![booking_minutes_ahead("b-1", 120)]);
        h.mailer.set_fail(true);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.two_hour_reminders, 0);
        assert!(!h.store.snapshot().await[0].two_hour_reminder_sent);

        // Mail recovers: the next trigger is the retry mechanism.
        h.mailer.set_fail(false);
        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.two_hour_reminders, 1);
        assert!(h.store.snapshot().await[0].two_hour_reminder_sent);
    }

    #[tokio::test]
    async fn one_failing_record_does_not_block_others() {
        // Both records are due; mail fails for everyone, so both are
        // attempted and both count as errors -- no early abort.
        let h = harness(vec![
            booking_minutes_ahead("b-1", 120),
            booking_minutes_ahead("b-2", 30),
        ]);
        h.mailer.set_fail(true);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.errors, 2);
    }

    #[tokio::test]
    async fn store_read_failure_fails_the_run() {
        let h = harness(vec![booking_minutes_ahead("b-1", 120)]);
        h.store.set_fail_reads(true);
        assert!(h.runner.run(now()).await.is_err());
    }

    #[tokio::test]
    async fn enriched_booking_gets_personalized_copy() {
        let mut booking = booking_minutes_ahead("b-1", 24 * 60);
        booking.enrichment = Some(enrichment_fixture("Acme"));
        let h = harness(vec![booking]);

        h.runner.run(now()).await.unwrap();

        let sent = h.mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].subject.starts_with("mock one-day reminder"), "got: {}", sent[0].subject);
        assert_eq!(h.generator.call_count(), 1);
    }

    #[tokio::test]
    async fn generator_failure_falls_back_to_static_copy() {
        let mut booking = booking_minutes_ahead("b-1", 24 * 60);
        booking.enrichment = Some(enrichment_fixture("Acme"));
        let h = harness(vec![booking]);
        h.generator.set_fail(true);

        let summary = h.runner.run(now()).await.unwrap();
        assert_eq!(summary.one_day_reminders, 1);
        assert_eq!(summary.errors, 0);

        let sent = h.mailer.sent().await;
        assert!(sent[0].subject.contains("Tomorrow"), "got: {}", sent[0].subject);
    }

    #[tokio::test]
    async fn unenriched_booking_skips_the_generator() {
        let h = harness(vec![booking_minutes_ahead("b-1", 30)]);
        h.runner.run(now()).await.unwrap();
        assert_eq!(h.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn summary_serializes_with_original_field_names() {
        let summary = RunSummary::new(now());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("oneDayReminders").is_some());
        assert!(json.get("twoHourReminders").is_some());
        assert!(json.get("thirtyMinReminders").is_some());
        assert!(json.get("errors").is_some());
    }
}
