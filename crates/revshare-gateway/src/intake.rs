// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking intake: validation, record construction, and the
//! durability-first orchestration of enrichment and notification.
//!
//! The record is persisted before any external call is attempted. Once
//! it exists, enrichment and email failures are logged and swallowed;
//! the submitter only ever sees "confirmed" or a generic server error.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use revshare_core::types::{
    Booking, DealSize, EmailAttachment, OutgoingEmail, SentFlag, TimeSlot, meeting_instant,
};
use revshare_core::RevshareError;
use revshare_email::templates;

use crate::server::AppState;

/// Wire payload for the booking creation endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub deal_size: String,
    /// Free-text challenge. Older clients send `currentChallenge`.
    #[serde(default, alias = "currentChallenge")]
    pub challenge: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Half-hour slot display string, e.g. `"10:00 AM"`.
    #[serde(default)]
    pub time: String,
}

/// Booking summary returned to the submitter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: String,
    /// Human-formatted meeting date, e.g. `"Monday, June 1, 2026"`.
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Validated intake fields.
struct ValidatedBooking {
    name: String,
    email: String,
    website: String,
    deal_size: DealSize,
    challenge: Option<String>,
    date: NaiveDate,
    time: TimeSlot,
}

fn required(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("missing required field: {field}"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn validate(request: BookingRequest) -> Result<ValidatedBooking, String> {
    let name = required(&request.name, "name")?;
    let email = required(&request.email, "email")?;
    if !email.contains('@') {
        return Err(format!("invalid email address: {email}"));
    }
    let website = required(&request.website, "website")?;

    let deal_size_raw = required(&request.deal_size, "dealSize")?;
    let deal_size = DealSize::from_str(&deal_size_raw)
        .map_err(|_| format!("unknown deal size: {deal_size_raw}"))?;

    let date_raw = required(&request.date, "date")?;
    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| format!("date must be YYYY-MM-DD, got: {date_raw}"))?;

    let time_raw = required(&request.time, "time")?;
    let time =
        TimeSlot::from_str(&time_raw).map_err(|_| format!("unknown time slot: {time_raw}"))?;

    let challenge = request
        .challenge
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    Ok(ValidatedBooking {
        name,
        email,
        website,
        deal_size,
        challenge,
        date,
        time,
    })
}

/// Validate a submission, persist the record, and run the best-effort
/// enrichment and notification steps.
///
/// Everything up to and including [`BookingStore::append`] fails the
/// request; everything after it is logged and swallowed.
///
/// [`BookingStore::append`]: revshare_core::BookingStore::append
pub async fn process_booking(
    state: &AppState,
    request: BookingRequest,
) -> Result<BookingSummary, RevshareError> {
    let valid = validate(request).map_err(RevshareError::Validation)?;

    let meeting_at = meeting_instant(valid.date, valid.time, state.settings.business_offset);
    let mut booking = Booking {
        id: Uuid::new_v4().to_string(),
        name: valid.name,
        email: valid.email,
        website: valid.website,
        deal_size: valid.deal_size,
        challenge: valid.challenge,
        date: valid.date,
        time: valid.time,
        meeting_at,
        created_at: Utc::now(),
        enrichment: None,
        confirmation_sent: false,
        one_day_reminder_sent: false,
        two_hour_reminder_sent: false,
        thirty_min_reminder_sent: false,
    };

    // Durability first: the record must exist even if everything
    // downstream fails.
    state.store.append(&booking).await?;
    info!(booking_id = %booking.id, website = %booking.website, "booking created");

    match state
        .generator
        .booking_content(&booking.website, booking.deal_size, booking.challenge.as_deref())
        .await
    {
        Ok(enrichment) => {
            if let Err(e) = state.store.attach_enrichment(&booking.id, &enrichment).await {
                warn!(error = %e, booking_id = %booking.id, "failed to persist enrichment");
            }
            booking.enrichment = Some(enrichment);
        }
        Err(e) => {
            warn!(error = %e, booking_id = %booking.id, "enrichment failed, continuing without personalization");
        }
    }

    let date_display = booking.date.format("%A, %B %-d, %Y").to_string();
    send_confirmation(state, &booking, &date_display).await;
    notify_operator(state, &booking, &date_display).await;

    Ok(BookingSummary {
        id: booking.id.clone(),
        date: date_display,
        time: booking.time.to_string(),
        company_name: booking.company_name().map(str::to_string),
    })
}

/// The playbook document as an email attachment, when enrichment
/// produced one.
fn playbook_attachment(booking: &Booking) -> Option<EmailAttachment> {
    booking.enrichment.as_ref().map(|enrichment| EmailAttachment {
        filename: templates::playbook_filename(&enrichment.research().company_name),
        content_type: "text/html".to_string(),
        body: enrichment.playbook_html().to_string(),
    })
}

/// Send the confirmation email and flip the flag when it goes out.
async fn send_confirmation(state: &AppState, booking: &Booking, date_display: &str) {
    let calendar_url =
        templates::google_calendar_url(booking, state.settings.meeting_link.as_deref());
    let content = templates::confirmation_email(booking, date_display, Some(&calendar_url));

    let outcome = state
        .mailer
        .send(OutgoingEmail {
            to: booking.email.clone(),
            subject: content.subject,
            html: content.html,
            attachment: playbook_attachment(booking),
        })
        .await;

    match outcome {
        Ok(()) => {
            if let Err(e) = state
                .store
                .mark_sent(&booking.id, SentFlag::Confirmation)
                .await
            {
                warn!(error = %e, booking_id = %booking.id, "failed to record confirmation flag");
            }
        }
        Err(e) => warn!(error = %e, booking_id = %booking.id, "confirmation email failed"),
    }
}

/// Notify the operator inbox of the new booking.
async fn notify_operator(state: &AppState, booking: &Booking, date_display: &str) {
    let content = templates::operator_notification(booking, date_display);
    let outcome = state
        .mailer
        .send(OutgoingEmail {
            to: state.settings.operator_email.clone(),
            subject: content.subject,
            html: content.html,
            attachment: playbook_attachment(booking),
        })
        .await;

    if let Err(e) = outcome {
        warn!(error = %e, booking_id = %booking.id, "operator notification failed");
    }
}
