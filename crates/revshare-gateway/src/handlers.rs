// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the service endpoints.

use std::str::FromStr;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use revshare_content::lead_magnet::{domain_of, is_personal_email, topic_for};
use revshare_core::types::{Booking, OutgoingEmail, ReminderKind, TimeSlot, Topic, meeting_instant};
use revshare_core::RevshareError;
use revshare_email::templates;
use revshare_scheduler::{ReminderRunner, RunSummary};

use crate::intake::{self, BookingRequest, BookingSummary};
use crate::server::AppState;

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response body for booking creation.
#[derive(Debug, Serialize)]
pub struct BookingCreated {
    pub success: bool,
    pub booking: BookingSummary,
}

/// Response body for the booking listing.
#[derive(Debug, Serialize)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

/// Response body for a reminder run.
#[derive(Debug, Serialize)]
pub struct ReminderRunResponse {
    pub success: bool,
    pub message: String,
    pub results: RunSummary,
}

/// Request body for the manual reminder send.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualReminderRequest {
    /// Reminder kind: `one-day`, `two-hours`, or `thirty-min`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Request body for the lead-magnet endpoint.
#[derive(Debug, Deserialize)]
pub struct LeadMagnetRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body for the lead-magnet endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMagnetResponse {
    pub success: bool,
    pub company_name: String,
    pub topic_title: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn server_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /api/bookings
///
/// Validates the submission, persists the record, and runs the
/// best-effort enrichment and notification steps. Submitters only see
/// success or a generic failure; enrichment and email outcomes never
/// change the response.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<BookingRequest>,
) -> Response {
    match intake::process_booking(&state, body).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(BookingCreated {
                success: true,
                booking: summary,
            }),
        )
            .into_response(),
        Err(RevshareError::Validation(message)) => bad_request(message),
        Err(e) => {
            error!(error = %e, "booking creation failed");
            server_error("Failed to create booking")
        }
    }
}

/// GET /api/bookings
///
/// Returns every stored record. No pagination; volume is a handful of
/// bookings per day.
pub async fn list_bookings(State(state): State<AppState>) -> Response {
    match state.store.list_all().await {
        Ok(bookings) => (StatusCode::OK, Json(BookingList { bookings })).into_response(),
        Err(e) => {
            error!(error = %e, "booking listing failed");
            server_error("Failed to load bookings")
        }
    }
}

/// GET /api/cron/send-reminders
///
/// One reminder pass over all stored bookings, invoked by an external
/// timer. The shared-secret check happens in middleware.
pub async fn run_reminders(State(state): State<AppState>) -> Response {
    let runner = ReminderRunner::new(
        state.store.clone(),
        state.generator.clone(),
        state.mailer.clone(),
    );
    match runner.run(Utc::now()).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ReminderRunResponse {
                success: true,
                message: "Reminder check complete".to_string(),
                results: summary,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "reminder run failed");
            server_error("Failed to process reminders")
        }
    }
}

/// POST /api/send-reminders
///
/// Sends one static-copy reminder to an arbitrary recipient without
/// touching the store. Operator tooling for re-sends and smoke tests.
pub async fn send_manual_reminder(
    State(state): State<AppState>,
    Json(body): Json<ManualReminderRequest>,
) -> Response {
    for (value, field) in [
        (&body.kind, "type"),
        (&body.name, "name"),
        (&body.email, "email"),
        (&body.date, "date"),
        (&body.time, "time"),
    ] {
        if value.trim().is_empty() {
            return bad_request(format!("missing required field: {field}"));
        }
    }

    let Ok(kind) = ReminderKind::from_str(&body.kind) else {
        return bad_request(format!("unknown reminder type: {}", body.kind));
    };
    let Ok(date) = NaiveDate::parse_from_str(&body.date, "%Y-%m-%d") else {
        return bad_request(format!("date must be YYYY-MM-DD, got: {}", body.date));
    };
    let Ok(time) = TimeSlot::from_str(&body.time) else {
        return bad_request(format!("unknown time slot: {}", body.time));
    };

    // Transient record for template rendering only; nothing is stored.
    let booking = Booking {
        id: "manual".to_string(),
        name: body.name,
        email: body.email,
        website: body.company.unwrap_or_default(),
        deal_size: revshare_core::types::DealSize::TenToTwentyFive,
        challenge: None,
        date,
        time,
        meeting_at: meeting_instant(date, time, state.settings.business_offset),
        created_at: Utc::now(),
        enrichment: None,
        confirmation_sent: false,
        one_day_reminder_sent: false,
        two_hour_reminder_sent: false,
        thirty_min_reminder_sent: false,
    };

    let date_display = booking.date.format("%A, %B %-d, %Y").to_string();
    let content = templates::fallback_reminder(kind, &booking, &date_display);
    let send = state
        .mailer
        .send(OutgoingEmail {
            to: booking.email.clone(),
            subject: content.subject,
            html: content.html,
            attachment: None,
        })
        .await;

    match send {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": format!("{kind} reminder sent to {}", booking.email),
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "manual reminder send failed");
            server_error("Failed to send reminder")
        }
    }
}

/// POST /api/lead-magnet
///
/// Generates and emails the personalized guide for a company email
/// address. Free-provider addresses are rejected up front.
pub async fn send_lead_magnet(
    State(state): State<AppState>,
    Json(body): Json<LeadMagnetRequest>,
) -> Response {
    let Some(email) = body.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) else {
        return bad_request("Email is required");
    };

    if is_personal_email(email) {
        return bad_request(
            "Please use your company email address to receive personalized insights.",
        );
    }

    let Some(domain) = domain_of(email) else {
        return bad_request("Invalid email format");
    };

    let today = Utc::now()
        .with_timezone(&state.settings.business_offset)
        .date_naive();
    let topic = topic_for(today);

    let content = match state.generator.lead_magnet(email, &domain, topic).await {
        Ok(content) => content,
        Err(e) => {
            error!(error = %e, domain = %domain, "lead-magnet generation failed");
            return server_error("Failed to generate and send your guide. Please try again.");
        }
    };

    let rendered = templates::lead_magnet_email(&content, &state.settings.booking_url);
    let send = state
        .mailer
        .send(OutgoingEmail {
            to: email.to_string(),
            subject: rendered.subject,
            html: rendered.html,
            attachment: None,
        })
        .await;

    match send {
        Ok(()) => (
            StatusCode::OK,
            Json(LeadMagnetResponse {
                success: true,
                company_name: content.company_name,
                topic_title: topic.title.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, domain = %domain, "lead-magnet email failed");
            server_error("Failed to generate and send your guide. Please try again.")
        }
    }
}

/// GET /api/todays-topic
///
/// The rotating topic of the day, a pure function of the business-local
/// calendar date.
pub async fn todays_topic(State(state): State<AppState>) -> Json<Topic> {
    let today = Utc::now()
        .with_timezone(&state.settings.business_offset)
        .date_naive();
    Json(*topic_for(today))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
