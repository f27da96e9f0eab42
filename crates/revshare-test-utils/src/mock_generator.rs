// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock content generator with deterministic output and failure injection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use revshare_core::types::{
    Booking, DealSize, Enrichment, LeadMagnetContent, LeadMagnetSection, ReminderCopy,
    ReminderKind, Topic,
};
use revshare_core::{ContentGenerator, RevshareError};

use crate::fixtures::enrichment_fixture;

/// Deterministic [`ContentGenerator`] for tests.
///
/// Produces canned payloads derived from its inputs and counts calls,
/// so tests can assert both the output wiring and how often the
/// generator was consulted.
#[derive(Default)]
pub struct MockGenerator {
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail until cleared.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of generator calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), RevshareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RevshareError::Generator {
                message: "injected generator failure".into(),
                source: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentGenerator for MockGenerator {
    async fn booking_content(
        &self,
        website: &str,
        _deal_size: DealSize,
        _challenge: Option<&str>,
    ) -> Result<Enrichment, RevshareError> {
        self.record_call()?;
        // Derive a stable company name from the domain: "acme.io" -> "Acme".
        let stem = website
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .split('.')
            .next()
            .unwrap_or(website);
        let mut company = stem.to_string();
        if let Some(first) = company.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Ok(enrichment_fixture(&company))
    }

    async fn reminder_copy(
        &self,
        kind: ReminderKind,
        booking: &Booking,
    ) -> Result<ReminderCopy, RevshareError> {
        self.record_call()?;
        Ok(ReminderCopy {
            subject: format!("mock {kind} reminder for {}", booking.first_name()),
            body: format!("Hi {}, see you soon.", booking.first_name()),
        })
    }

    async fn lead_magnet(
        &self,
        _email: &str,
        domain: &str,
        topic: &Topic,
    ) -> Result<LeadMagnetContent, RevshareError> {
        self.record_call()?;
        Ok(LeadMagnetContent {
            company_name: domain.to_string(),
            company_description: format!("{domain} does business."),
            title: topic.title.to_string(),
            emoji: topic.emoji.to_string(),
            sections: vec![LeadMagnetSection {
                heading: "Mock heading".into(),
                content: "Mock content.".into(),
                personalized_tip: "Mock tip.".into(),
            }],
            personalized_intro: format!("Hello {domain} team."),
            call_to_action: "Book a call.".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking_fixture;
    use chrono::{FixedOffset, TimeZone};

    #[tokio::test]
    async fn booking_content_derives_company_from_domain() {
        let generator = MockGenerator::new();
        let enrichment = generator
            .booking_content("acme.io", DealSize::HundredPlus, None)
            .await
            .unwrap();
        assert_eq!(enrichment.research().company_name, "Acme");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_mode_propagates_and_still_counts() {
        let generator = MockGenerator::new();
        generator.set_fail(true);

        let meeting_at = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 6, 1, 10, 0, 0)
            .unwrap();
        let booking = booking_fixture("b-1", meeting_at);

        assert!(
            generator
                .reminder_copy(ReminderKind::OneDay, &booking)
                .await
                .is_err()
        );
        assert_eq!(generator.call_count(), 1);
    }
}
