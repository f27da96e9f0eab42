// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test fixtures.

use chrono::{DateTime, FixedOffset, Utc};

use revshare_core::types::{
    Booking, CompanyResearch, DealSize, Enrichment, EnrichmentV1, TimeSlot,
};

/// A booking with the given id and meeting instant and all flags false.
///
/// The `date`/`time` display fields are fixed; scheduler behavior only
/// reads `meeting_at`.
pub fn booking_fixture(id: &str, meeting_at: DateTime<FixedOffset>) -> Booking {
    Booking {
        id: id.into(),
        name: "Ada Lovelace".into(),
        email: "ada@acme.io".into(),
        website: "acme.io".into(),
        deal_size: DealSize::TenToTwentyFive,
        challenge: Some("no pipeline".into()),
        date: meeting_at.date_naive(),
        time: TimeSlot::TenAm,
        meeting_at,
        created_at: Utc::now(),
        enrichment: None,
        confirmation_sent: false,
        one_day_reminder_sent: false,
        two_hour_reminder_sent: false,
        thirty_min_reminder_sent: false,
    }
}

/// A canned enrichment payload for fixture bookings.
pub fn enrichment_fixture(company_name: &str) -> Enrichment {
    Enrichment::V1(EnrichmentV1 {
        research: CompanyResearch {
            company_name: company_name.into(),
            company_description: format!("{company_name} builds widgets."),
            ..Default::default()
        },
        hook: format!("We can fill {company_name}'s pipeline."),
        value_proposition: "Pay only from closed revenue.".into(),
        playbook_html: "<html><body>playbook</body></html>".into(),
        extra: serde_json::Map::new(),
    })
}
