// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking domain types shared across the RevShare workspace.
//!
//! Wire-facing structs serialize as camelCase to match the persisted
//! record layout and the public API payloads.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of the fixed half-hour call slots offered on the booking page.
///
/// The set is closed: 9:00 AM through 11:30 AM and 1:00 PM through
/// 4:30 PM (no noon slots). Parsing rejects anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum TimeSlot {
    #[strum(serialize = "9:00 AM")]
    #[serde(rename = "9:00 AM")]
    NineAm,
    #[strum(serialize = "9:30 AM")]
    #[serde(rename = "9:30 AM")]
    NineThirtyAm,
    #[strum(serialize = "10:00 AM")]
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[strum(serialize = "10:30 AM")]
    #[serde(rename = "10:30 AM")]
    TenThirtyAm,
    #[strum(serialize = "11:00 AM")]
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[strum(serialize = "11:30 AM")]
    #[serde(rename = "11:30 AM")]
    ElevenThirtyAm,
    #[strum(serialize = "1:00 PM")]
    #[serde(rename = "1:00 PM")]
    OnePm,
    #[strum(serialize = "1:30 PM")]
    #[serde(rename = "1:30 PM")]
    OneThirtyPm,
    #[strum(serialize = "2:00 PM")]
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[strum(serialize = "2:30 PM")]
    #[serde(rename = "2:30 PM")]
    TwoThirtyPm,
    #[strum(serialize = "3:00 PM")]
    #[serde(rename = "3:00 PM")]
    ThreePm,
    #[strum(serialize = "3:30 PM")]
    #[serde(rename = "3:30 PM")]
    ThreeThirtyPm,
    #[strum(serialize = "4:00 PM")]
    #[serde(rename = "4:00 PM")]
    FourPm,
    #[strum(serialize = "4:30 PM")]
    #[serde(rename = "4:30 PM")]
    FourThirtyPm,
}

impl TimeSlot {
    /// 24-hour clock (hour, minute) for this slot.
    pub fn hour_minute(&self) -> (u32, u32) {
        match self {
            TimeSlot::NineAm => (9, 0),
            TimeSlot::NineThirtyAm => (9, 30),
            TimeSlot::TenAm => (10, 0),
            TimeSlot::TenThirtyAm => (10, 30),
            TimeSlot::ElevenAm => (11, 0),
            TimeSlot::ElevenThirtyAm => (11, 30),
            TimeSlot::OnePm => (13, 0),
            TimeSlot::OneThirtyPm => (13, 30),
            TimeSlot::TwoPm => (14, 0),
            TimeSlot::TwoThirtyPm => (14, 30),
            TimeSlot::ThreePm => (15, 0),
            TimeSlot::ThreeThirtyPm => (15, 30),
            TimeSlot::FourPm => (16, 0),
            TimeSlot::FourThirtyPm => (16, 30),
        }
    }
}

/// Self-reported average deal-size bucket from the intake form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum DealSize {
    #[strum(serialize = "$10k - $25k")]
    #[serde(rename = "$10k - $25k")]
    TenToTwentyFive,
    #[strum(serialize = "$25k - $50k")]
    #[serde(rename = "$25k - $50k")]
    TwentyFiveToFifty,
    #[strum(serialize = "$50k - $100k")]
    #[serde(rename = "$50k - $100k")]
    FiftyToHundred,
    #[strum(serialize = "$100k+")]
    #[serde(rename = "$100k+")]
    HundredPlus,
}

/// The three reminder emails sent ahead of a meeting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ReminderKind {
    #[strum(serialize = "one-day")]
    #[serde(rename = "one-day")]
    OneDay,
    #[strum(serialize = "two-hours")]
    #[serde(rename = "two-hours")]
    TwoHour,
    #[strum(serialize = "thirty-min")]
    #[serde(rename = "thirty-min")]
    ThirtyMin,
}

impl ReminderKind {
    /// The booking flag that records this reminder as sent.
    pub fn flag(&self) -> SentFlag {
        match self {
            ReminderKind::OneDay => SentFlag::OneDayReminder,
            ReminderKind::TwoHour => SentFlag::TwoHourReminder,
            ReminderKind::ThirtyMin => SentFlag::ThirtyMinReminder,
        }
    }
}

/// The four monotonic sent flags on a booking record.
///
/// Each flag transitions false -> true at most once, only after the
/// corresponding send succeeds. There is no reverse transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum SentFlag {
    #[strum(serialize = "confirmation")]
    Confirmation,
    #[strum(serialize = "one-day-reminder")]
    OneDayReminder,
    #[strum(serialize = "two-hour-reminder")]
    TwoHourReminder,
    #[strum(serialize = "thirty-min-reminder")]
    ThirtyMinReminder,
}

/// A scheduled sales call with a prospective partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub website: String,
    pub deal_size: DealSize,
    /// Free-text lead-generation challenge. Optional on intake.
    #[serde(default)]
    pub challenge: Option<String>,
    /// Requested calendar date (display; the scheduler uses `meeting_at`).
    pub date: NaiveDate,
    pub time: TimeSlot,
    /// The meeting instant, computed once at intake with an explicit
    /// offset. All reminder-window arithmetic runs against this field.
    pub meeting_at: DateTime<FixedOffset>,
    pub created_at: DateTime<Utc>,
    /// AI-generated personalization, attached once at creation when
    /// the generator succeeds. Absence never blocks other behavior.
    #[serde(default)]
    pub enrichment: Option<Enrichment>,
    #[serde(default)]
    pub confirmation_sent: bool,
    #[serde(default)]
    pub one_day_reminder_sent: bool,
    #[serde(default)]
    pub two_hour_reminder_sent: bool,
    #[serde(default)]
    pub thirty_min_reminder_sent: bool,
}

impl Booking {
    /// Whether the given flag has been set.
    pub fn sent(&self, flag: SentFlag) -> bool {
        match flag {
            SentFlag::Confirmation => self.confirmation_sent,
            SentFlag::OneDayReminder => self.one_day_reminder_sent,
            SentFlag::TwoHourReminder => self.two_hour_reminder_sent,
            SentFlag::ThirtyMinReminder => self.thirty_min_reminder_sent,
        }
    }

    /// Set the given flag. Flags only ever move false -> true.
    pub fn mark(&mut self, flag: SentFlag) {
        match flag {
            SentFlag::Confirmation => self.confirmation_sent = true,
            SentFlag::OneDayReminder => self.one_day_reminder_sent = true,
            SentFlag::TwoHourReminder => self.two_hour_reminder_sent = true,
            SentFlag::ThirtyMinReminder => self.thirty_min_reminder_sent = true,
        }
    }

    /// First whitespace-separated token of the requester name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Inferred company name from enrichment, when present.
    pub fn company_name(&self) -> Option<&str> {
        self.enrichment
            .as_ref()
            .map(|e| e.research().company_name.as_str())
    }
}

/// Combine a calendar date and slot into an absolute meeting instant
/// using the configured business-hours offset.
pub fn meeting_instant(date: NaiveDate, slot: TimeSlot, offset: FixedOffset) -> DateTime<FixedOffset> {
    let (hour, minute) = slot.hour_minute();
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .expect("slot times are valid wall-clock times");
    offset
        .from_local_datetime(&naive)
        .single()
        .expect("fixed-offset datetimes are unambiguous")
}

/// Versioned AI-generated personalization payload.
///
/// The generator contract has drifted across deployments; a tagged
/// enum keeps old records readable while newer shapes add fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version", rename_all = "snake_case")]
pub enum Enrichment {
    V1(EnrichmentV1),
}

impl Enrichment {
    pub fn research(&self) -> &CompanyResearch {
        match self {
            Enrichment::V1(v1) => &v1.research,
        }
    }

    pub fn hook(&self) -> &str {
        match self {
            Enrichment::V1(v1) => &v1.hook,
        }
    }

    pub fn value_proposition(&self) -> &str {
        match self {
            Enrichment::V1(v1) => &v1.value_proposition,
        }
    }

    pub fn playbook_html(&self) -> &str {
        match self {
            Enrichment::V1(v1) => &v1.playbook_html,
        }
    }
}

/// Current enrichment shape: research, hook, value proposition, and
/// the rendered playbook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentV1 {
    pub research: CompanyResearch,
    pub hook: String,
    pub value_proposition: String,
    pub playbook_html: String,
    /// Fields produced by newer generator variants (sequencing plans,
    /// reply templates, metrics tables) ride along untyped.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Structured research about the booker's company.
///
/// Every collection defaults to empty: the generator's output shape
/// varies and a missing list must not fail record deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResearch {
    pub company_name: String,
    #[serde(default)]
    pub company_description: String,
    #[serde(default)]
    pub target_audience: TargetAudience,
    #[serde(default)]
    pub technographic_signals: Vec<String>,
    #[serde(default)]
    pub behavioral_indicators: Vec<String>,
    #[serde(default)]
    pub sample_emails: Vec<SampleEmail>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// One sample cold email in the generated playbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEmail {
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub angle: String,
}

/// Subject and plain-text body for a personalized reminder email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderCopy {
    pub subject: String,
    pub body: String,
}

/// A rotating lead-magnet topic. The active topic is a pure function
/// of the calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    /// Focus line handed to the generator prompt.
    pub focus: &'static str,
}

/// Personalized lead-magnet guide returned by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMagnetContent {
    pub company_name: String,
    #[serde(default)]
    pub company_description: String,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub sections: Vec<LeadMagnetSection>,
    #[serde(default)]
    pub personalized_intro: String,
    #[serde(default)]
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMagnetSection {
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub personalized_tip: String,
}

/// A single outgoing email handed to the notifier. One attempt, no
/// queueing; the caller owns failure logging.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachment: Option<EmailAttachment>,
}

/// Optional attachment (the playbook document).
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn time_slot_parses_all_fourteen_display_strings() {
        let slots: Vec<TimeSlot> = TimeSlot::iter().collect();
        assert_eq!(slots.len(), 14);
        for slot in slots {
            let displayed = slot.to_string();
            let parsed = TimeSlot::from_str(&displayed).expect("display string should parse back");
            assert_eq!(slot, parsed);
        }
    }

    #[test]
    fn time_slot_rejects_unknown_strings() {
        assert!(TimeSlot::from_str("12:00 PM").is_err());
        assert!(TimeSlot::from_str("9:00").is_err());
        assert!(TimeSlot::from_str("").is_err());
    }

    #[test]
    fn afternoon_slots_map_to_24_hour_clock() {
        assert_eq!(TimeSlot::OnePm.hour_minute(), (13, 0));
        assert_eq!(TimeSlot::FourThirtyPm.hour_minute(), (16, 30));
        assert_eq!(TimeSlot::NineAm.hour_minute(), (9, 0));
    }

    #[test]
    fn meeting_instant_applies_offset() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = meeting_instant(date, TimeSlot::TenAm, est);
        // 10:00 AM EST == 15:00 UTC
        assert_eq!(instant.with_timezone(&Utc).to_rfc3339(), "2026-06-01T15:00:00+00:00");
    }

    #[test]
    fn deal_size_round_trips_through_display() {
        let bucket = DealSize::FiftyToHundred;
        assert_eq!(bucket.to_string(), "$50k - $100k");
        assert_eq!(DealSize::from_str("$50k - $100k").unwrap(), bucket);
    }

    #[test]
    fn reminder_kind_maps_to_its_flag() {
        assert_eq!(ReminderKind::OneDay.flag(), SentFlag::OneDayReminder);
        assert_eq!(ReminderKind::TwoHour.flag(), SentFlag::TwoHourReminder);
        assert_eq!(ReminderKind::ThirtyMin.flag(), SentFlag::ThirtyMinReminder);
    }

    fn sample_booking() -> Booking {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
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
            enrichment: None,
            confirmation_sent: false,
            one_day_reminder_sent: false,
            two_hour_reminder_sent: false,
            thirty_min_reminder_sent: false,
        }
    }

    #[test]
    fn booking_serializes_as_camel_case() {
        let booking = sample_booking();
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["dealSize"], "$10k - $25k");
        assert_eq!(json["time"], "10:00 AM");
        assert_eq!(json["confirmationSent"], false);
        assert!(json.get("meetingAt").is_some());
    }

    #[test]
    fn booking_round_trips_through_json() {
        let booking = sample_booking();
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn booking_flags_are_monotonic_setters() {
        let mut booking = sample_booking();
        assert!(!booking.sent(SentFlag::TwoHourReminder));
        booking.mark(SentFlag::TwoHourReminder);
        assert!(booking.sent(SentFlag::TwoHourReminder));
        // Other flags untouched.
        assert!(!booking.sent(SentFlag::Confirmation));
        assert!(!booking.sent(SentFlag::OneDayReminder));
    }

    #[test]
    fn first_name_takes_leading_token() {
        let booking = sample_booking();
        assert_eq!(booking.first_name(), "Ada");
    }

    #[test]
    fn enrichment_tolerates_missing_and_unknown_fields() {
        // A record written by a newer generator variant: extra fields
        // present, some research lists absent.
        let json = r#"{
            "version": "v1",
            "research": { "companyName": "Acme" },
            "hook": "We can fill your pipeline.",
            "valueProposition": "Pay from closed revenue only.",
            "playbookHtml": "<html></html>",
            "sequencingPlan": ["day 1", "day 3"]
        }"#;
        let enrichment: Enrichment = serde_json::from_str(json).unwrap();
        assert_eq!(enrichment.research().company_name, "Acme");
        assert!(enrichment.research().sample_emails.is_empty());
        let Enrichment::V1(v1) = &enrichment;
        assert!(v1.extra.contains_key("sequencingPlan"));
    }

    #[test]
    fn enrichment_round_trips_extra_fields() {
        let mut extra = serde_json::Map::new();
        extra.insert("replyTemplates".into(), serde_json::json!(["t1"]));
        let enrichment = Enrichment::V1(EnrichmentV1 {
            research: CompanyResearch {
                company_name: "Acme".into(),
                ..Default::default()
            },
            hook: "hook".into(),
            value_proposition: "value".into(),
            playbook_html: "<html></html>".into(),
            extra,
        });
        let json = serde_json::to_string(&enrichment).unwrap();
        let back: Enrichment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enrichment);
    }
}
