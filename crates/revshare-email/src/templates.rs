// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static email templates and calendar-link helpers.
//!
//! These are the fallback bodies used when the content generator is
//! unavailable, plus the operator notification and the wrapper that
//! turns personalized plain-text copy into HTML. Bodies are kept
//! compact; the contract is subject + HTML.

use chrono::Utc;

use revshare_core::types::{Booking, LeadMagnetContent, ReminderCopy, ReminderKind};

/// A rendered email: subject line plus HTML body.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Shared outer frame for customer-facing emails.
fn frame(inner: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="margin: 0; padding: 0; background-color: #050505; font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #050505; padding: 40px 20px;">
    <tr><td align="center">
      <table width="600" cellpadding="0" cellspacing="0" style="max-width: 600px;">
        <tr><td style="padding-bottom: 30px;">
          <span style="font-size: 24px; font-weight: bold; color: #ffffff;">REV<span style="color: #3b82f6;">SHARE</span></span>
        </td></tr>
        <tr><td style="background-color: #111113; border-radius: 16px; padding: 40px; border: 1px solid #27272a; color: #a1a1aa; font-size: 16px; line-height: 1.7;">
{inner}
        </td></tr>
        <tr><td style="padding-top: 30px; text-align: center;">
          <p style="color: #71717a; font-size: 14px; margin: 0;">Questions? Just reply to this email.</p>
          <p style="color: #52525b; font-size: 12px; margin: 16px 0 0 0;">&copy; {year} RevShare. All rights reserved.</p>
        </td></tr>
      </table>
    </td></tr>
  </table>
</body>
</html>
"#,
        year = Utc::now().format("%Y"),
    )
}

/// Key/value rows for the meeting-details box.
fn details_box(rows: &[(&str, &str)]) -> String {
    let mut html = String::from(
        r#"<div style="background-color: #0a0a0a; border-radius: 12px; padding: 20px; margin: 24px 0;"><table width="100%" cellpadding="0" cellspacing="0">"#,
    );
    for (label, value) in rows {
        html.push_str(&format!(
            r#"<tr><td style="color: #71717a; font-size: 14px; padding: 8px 0;">{label}</td><td style="color: #ffffff; font-size: 14px; padding: 8px 0; text-align: right;">{value}</td></tr>"#,
        ));
    }
    html.push_str("</table></div>");
    html
}

/// Booking confirmation sent to the requester.
///
/// Mentions the attached playbook only when one was generated, and the
/// personalized hook when enrichment succeeded.
pub fn confirmation_email(
    booking: &Booking,
    date_display: &str,
    calendar_url: Option<&str>,
) -> EmailContent {
    let company = booking.company_name().unwrap_or("your company");
    let time = booking.time.to_string();

    let mut inner = format!(
        r#"<h1 style="color: #ffffff; font-size: 28px; margin: 0 0 16px 0; text-align: center;">You're All Set, {first_name}!</h1>
<p style="text-align: center;">Your strategy call has been confirmed. We're excited to learn about {company} and explore how we can help fill your pipeline.</p>
"#,
        first_name = booking.first_name(),
    );

    if let Some(enrichment) = &booking.enrichment {
        inner.push_str(&format!(
            r#"<div style="border: 1px solid rgba(59, 130, 246, 0.2); border-radius: 12px; padding: 20px; margin: 24px 0; text-align: center;"><p style="color: #3b82f6; margin: 0;">"{hook}"</p></div>
"#,
            hook = enrichment.hook(),
        ));
    }

    inner.push_str(&details_box(&[
        ("Date:", date_display),
        ("Time:", &time),
        ("Duration:", "15 minutes"),
        ("Type:", "Video Call"),
    ]));

    if let Some(url) = calendar_url {
        inner.push_str(&format!(
            r#"<div style="text-align: center; margin: 24px 0;"><a href="{url}" style="display: inline-block; background-color: #3b82f6; color: #ffffff; padding: 14px 28px; border-radius: 12px; text-decoration: none; font-weight: 600;">Add to Calendar</a></div>
"#,
        ));
    }

    if booking.enrichment.is_some() {
        inner.push_str(&format!(
            r#"<div style="border: 1px solid rgba(16, 185, 129, 0.2); border-radius: 12px; padding: 20px; margin: 24px 0;"><h3 style="color: #10b981; font-size: 16px; margin: 0 0 8px 0;">Your Custom Playbook is Attached</h3><p style="font-size: 14px; margin: 0;">We've prepared a personalized outbound playbook for {company} with target-audience insights and five sample cold emails. Open the attached file before our call.</p></div>
"#,
        ));
    }

    inner.push_str(
        r#"<div style="border-top: 1px solid #27272a; padding-top: 24px;"><h3 style="color: #ffffff; font-size: 16px; margin: 0 0 12px 0;">Before our call, have ready:</h3><ul style="font-size: 14px; margin: 0; padding-left: 20px;"><li>A clear idea of your ideal client profile</li><li>Your average deal size and sales cycle length</li><li>1-2 case studies or client results</li><li>Questions about how revenue-share works</li></ul></div>
"#,
    );

    EmailContent {
        subject: format!("You're confirmed! Strategy call on {date_display}"),
        html: frame(&inner),
    }
}

/// New-booking notification sent to the operator inbox.
pub fn operator_notification(booking: &Booking, date_display: &str) -> EmailContent {
    let company = booking.company_name().unwrap_or("Unknown");
    let time = booking.time.to_string();
    let deal_size = booking.deal_size.to_string();

    let mut inner = String::from(
        "<h2 style=\"color: #3b82f6; margin: 0 0 20px 0;\">New Strategy Call Booking</h2>\n",
    );
    inner.push_str(&details_box(&[
        ("Name", &booking.name),
        ("Email", &booking.email),
        ("Company", company),
        ("Website", &booking.website),
        ("Deal Size", &deal_size),
        ("Date", date_display),
        ("Time", &time),
    ]));

    if let Some(challenge) = &booking.challenge {
        inner.push_str(&format!(
            r#"<div style="margin-top: 20px; padding: 15px; background: #0a0a0a; border-radius: 8px;"><h3 style="color: #fff; margin: 0 0 10px 0; font-size: 14px;">Their Challenge:</h3><p style="margin: 0; font-size: 14px;">{challenge}</p></div>
"#,
        ));
    }

    if let Some(enrichment) = &booking.enrichment {
        inner.push_str(&format!(
            r#"<div style="margin-top: 20px; padding: 15px; background: #0a0a0a; border-radius: 8px;"><h3 style="color: #fff; margin: 0 0 10px 0; font-size: 14px;">AI Research Summary:</h3><p style="margin: 0; font-size: 14px;">{description}</p></div>
"#,
            description = enrichment.research().company_description,
        ));
    }

    EmailContent {
        subject: format!("New Booking: {} from {}", booking.name, company),
        html: frame(&inner),
    }
}

/// Static fallback reminder copy for a kind.
pub fn fallback_reminder(kind: ReminderKind, booking: &Booking, date_display: &str) -> EmailContent {
    let first_name = booking.first_name();
    let (subject, lead) = match kind {
        ReminderKind::OneDay => (
            "Tomorrow: Your strategy call with RevShare".to_string(),
            format!("Hi {first_name}, just a reminder that your strategy call is tomorrow. We're looking forward to it."),
        ),
        ReminderKind::TwoHour => (
            "In 2 hours: Strategy call with RevShare".to_string(),
            format!("Hi {first_name}, your strategy call starts in about two hours. Grab your notes on your ideal client profile and recent results."),
        ),
        ReminderKind::ThirtyMin => (
            "Starting in 30 mins!".to_string(),
            format!("Hi {first_name}, we're on in 30 minutes. See you there!"),
        ),
    };

    let time = booking.time.to_string();
    let mut inner = format!("<p>{lead}</p>\n");
    inner.push_str(&details_box(&[("Date:", date_display), ("Time:", &time)]));

    EmailContent {
        subject,
        html: frame(&inner),
    }
}

/// Wrap personalized plain-text reminder copy into the HTML frame.
pub fn personalized_reminder(
    copy: &ReminderCopy,
    booking: &Booking,
    date_display: &str,
) -> EmailContent {
    let body_html = copy.body.replace('\n', "<br>");
    let time = booking.time.to_string();
    let company = booking.company_name().unwrap_or("your company").to_string();

    let mut inner = format!("<div>{body_html}</div>\n");
    inner.push_str(&details_box(&[
        ("Date:", date_display),
        ("Time:", &time),
        ("Company:", &company),
    ]));

    EmailContent {
        subject: copy.subject.clone(),
        html: frame(&inner),
    }
}

/// Lead-magnet guide email.
pub fn lead_magnet_email(content: &LeadMagnetContent, booking_url: &str) -> EmailContent {
    let mut inner = format!(
        r#"<div style="text-align: center; margin-bottom: 30px;"><div style="font-size: 48px; margin-bottom: 16px;">{emoji}</div><h1 style="color: #ffffff; font-size: 26px; margin: 0 0 8px 0;">{title}</h1><p style="color: #3b82f6; margin: 0;">Personalized for {company}</p></div>
<p>{intro}</p>
"#,
        emoji = content.emoji,
        title = content.title,
        company = content.company_name,
        intro = content.personalized_intro,
    );

    for (index, section) in content.sections.iter().enumerate() {
        inner.push_str(&format!(
            r#"<div style="background-color: #0a0a0a; border-radius: 12px; padding: 20px; margin-bottom: 16px; border-left: 4px solid #3b82f6;"><h3 style="color: #ffffff; font-size: 18px; margin: 0 0 10px 0;">{number}. {heading}</h3><p style="font-size: 14px; margin: 0 0 12px 0;">{body}</p><p style="color: #3b82f6; font-size: 14px; margin: 0; font-style: italic;">For {company}: {tip}</p></div>
"#,
            number = index + 1,
            heading = section.heading,
            body = section.content,
            company = content.company_name,
            tip = section.personalized_tip,
        ));
    }

    inner.push_str(&format!(
        r#"<div style="background: #3b82f6; border-radius: 12px; padding: 24px; margin-top: 30px; text-align: center;"><h3 style="color: #ffffff; font-size: 20px; margin: 0 0 12px 0;">Want Help Implementing This?</h3><p style="color: rgba(255,255,255,0.9); font-size: 14px; margin: 0 0 20px 0;">{cta}</p><a href="{booking_url}" style="display: inline-block; background-color: #ffffff; color: #3b82f6; padding: 14px 28px; border-radius: 8px; text-decoration: none; font-weight: 600;">Book Your Strategy Call</a></div>
"#,
        cta = content.call_to_action,
    ));

    EmailContent {
        subject: format!(
            "{} {} - Personalized for {}",
            content.emoji, content.title, content.company_name
        ),
        html: frame(&inner),
    }
}

/// Attachment filename for a company's playbook document.
pub fn playbook_filename(company_name: &str) -> String {
    let safe: String = company_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("RevShare_Playbook_{safe}.html")
}

/// Google Calendar "add event" URL for a booking.
///
/// Dates are rendered in UTC (`YYYYMMDDTHHMMSSZ`); the meeting link,
/// when configured, lands in both the details and location fields.
pub fn google_calendar_url(booking: &Booking, meeting_link: Option<&str>) -> String {
    let start = booking.meeting_at.with_timezone(&Utc);
    let end = start + chrono::Duration::minutes(15);
    let dates = format!(
        "{}/{}",
        start.format("%Y%m%dT%H%M%SZ"),
        end.format("%Y%m%dT%H%M%SZ")
    );

    let title = "RevShare Strategy Call";
    let details = meeting_link
        .map(|link| format!("Join the call:\n{link}"))
        .unwrap_or_else(|| "RevShare strategy call".to_string());

    let mut url = String::from("https://calendar.google.com/calendar/render?action=TEMPLATE");
    url.push_str(&format!("&text={}", percent_encode(title)));
    url.push_str(&format!("&dates={}", percent_encode(&dates)));
    url.push_str(&format!("&details={}", percent_encode(&details)));
    if let Some(link) = meeting_link {
        url.push_str(&format!("&location={}", percent_encode(link)));
    }
    url
}

/// Minimal percent-encoding for query parameter values.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use revshare_core::types::{
        CompanyResearch, DealSize, Enrichment, EnrichmentV1, LeadMagnetSection, TimeSlot,
        meeting_instant,
    };

    fn sample_booking(enriched: bool) -> Booking {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let enrichment = enriched.then(|| {
            Enrichment::V1(EnrichmentV1 {
                research: CompanyResearch {
                    company_name: "Acme Co".into(),
                    company_description: "Acme builds widgets.".into(),
                    ..Default::default()
                },
                hook: "We can fill Acme's pipeline.".into(),
                value_proposition: "Pay only on close.".into(),
                playbook_html: "<html></html>".into(),
                extra: Default::default(),
            })
        });
        Booking {
            id: "b-1".into(),
            name: "Ada Lovelace".into(),
            email: "ada@acme.io".into(),
            website: "acme.io".into(),
            deal_size: DealSize::TenToTwentyFive,
            challenge: Some("no pipeline".into()),
            date,
            time: TimeSlot::TenAm,
            meeting_at: meeting_instant(date, TimeSlot::TenAm, est),
            created_at: Utc::now(),
            enrichment,
            confirmation_sent: false,
            one_day_reminder_sent: false,
            two_hour_reminder_sent: false,
            thirty_min_reminder_sent: false,
        }
    }

    #[test]
    fn confirmation_mentions_hook_and_playbook_when_enriched() {
        let content = confirmation_email(&sample_booking(true), "Monday, June 1, 2026", None);
        assert!(content.subject.contains("Monday, June 1, 2026"));
        assert!(content.html.contains("You're All Set, Ada!"));
        assert!(content.html.contains("We can fill Acme's pipeline."));
        assert!(content.html.contains("Your Custom Playbook is Attached"));
    }

    #[test]
    fn confirmation_without_enrichment_skips_playbook_callout() {
        let content = confirmation_email(&sample_booking(false), "Monday, June 1, 2026", None);
        assert!(content.html.contains("your company"));
        assert!(!content.html.contains("Playbook is Attached"));
    }

    #[test]
    fn confirmation_includes_calendar_button_when_url_given() {
        let content = confirmation_email(
            &sample_booking(false),
            "Monday, June 1, 2026",
            Some("https://calendar.google.com/x"),
        );
        assert!(content.html.contains("Add to Calendar"));
    }

    #[test]
    fn operator_notification_lists_intake_fields() {
        let content = operator_notification(&sample_booking(true), "Monday, June 1, 2026");
        assert_eq!(content.subject, "New Booking: Ada Lovelace from Acme Co");
        assert!(content.html.contains("ada@acme.io"));
        assert!(content.html.contains("$10k - $25k"));
        assert!(content.html.contains("no pipeline"));
        assert!(content.html.contains("Acme builds widgets."));
    }

    #[test]
    fn fallback_reminders_have_distinct_subjects() {
        let booking = sample_booking(false);
        let one_day = fallback_reminder(ReminderKind::OneDay, &booking, "Monday, June 1, 2026");
        let two_hour = fallback_reminder(ReminderKind::TwoHour, &booking, "Monday, June 1, 2026");
        let thirty = fallback_reminder(ReminderKind::ThirtyMin, &booking, "Monday, June 1, 2026");

        assert!(one_day.subject.contains("Tomorrow"));
        assert!(two_hour.subject.contains("2 hours"));
        assert!(thirty.subject.contains("30 mins"));
        assert!(one_day.html.contains("10:00 AM"));
    }

    #[test]
    fn personalized_reminder_wraps_body_lines() {
        let booking = sample_booking(true);
        let copy = ReminderCopy {
            subject: "See you tomorrow!".into(),
            body: "Hi Ada,\nQuick note.".into(),
        };
        let content = personalized_reminder(&copy, &booking, "Monday, June 1, 2026");
        assert_eq!(content.subject, "See you tomorrow!");
        assert!(content.html.contains("Hi Ada,<br>Quick note."));
        assert!(content.html.contains("Acme Co"));
    }

    #[test]
    fn lead_magnet_email_numbers_sections() {
        let content = LeadMagnetContent {
            company_name: "Acme".into(),
            company_description: "Widgets".into(),
            title: "5 Signs".into(),
            emoji: "X".into(),
            sections: vec![
                LeadMagnetSection {
                    heading: "First".into(),
                    content: "c".into(),
                    personalized_tip: "t".into(),
                },
                LeadMagnetSection {
                    heading: "Second".into(),
                    content: "c".into(),
                    personalized_tip: "t".into(),
                },
            ],
            personalized_intro: "Hello Acme".into(),
            call_to_action: "Book now".into(),
        };
        let email = lead_magnet_email(&content, "https://revshare.example.com/book");
        assert!(email.subject.contains("Personalized for Acme"));
        assert!(email.html.contains("1. First"));
        assert!(email.html.contains("2. Second"));
        assert!(email.html.contains("https://revshare.example.com/book"));
    }

    #[test]
    fn playbook_filename_replaces_whitespace() {
        assert_eq!(
            playbook_filename("Acme Widget Co"),
            "RevShare_Playbook_Acme_Widget_Co.html"
        );
    }

    #[test]
    fn calendar_url_renders_utc_range() {
        let booking = sample_booking(false);
        let url = google_calendar_url(&booking, Some("https://meet.example.com/x"));
        // 10:00 AM EST == 15:00 UTC; 15-minute call.
        assert!(url.contains("20260601T150000Z%2F20260601T151500Z"));
        assert!(url.contains("action=TEMPLATE"));
        assert!(url.contains("location=https%3A%2F%2Fmeet.example.com%2Fx"));
    }
}
