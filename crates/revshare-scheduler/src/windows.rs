// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reminder window arithmetic.
//!
//! A reminder window is a time range before the meeting instant during
//! which a reminder type is eligible to be sent exactly once. The three
//! windows are independent: each is gated only by its own flag, and the
//! decision is a pure function of the record and the clock.

use chrono::{DateTime, Duration, Utc};

use revshare_core::types::{Booking, ReminderKind};

/// One-day reminder fires when whole hours-until-meeting is in this range.
pub const ONE_DAY_WINDOW_HOURS: (i64, i64) = (20, 28);

/// Two-hour reminder fires when whole minutes-until-meeting is in this range.
pub const TWO_HOUR_WINDOW_MINUTES: (i64, i64) = (90, 150);

/// Thirty-minute reminder fires when whole minutes-until-meeting is in this range.
pub const THIRTY_MIN_WINDOW_MINUTES: (i64, i64) = (20, 45);

/// The reminder kinds due for `booking` at `now`.
///
/// Meetings already in the past return nothing: stale records must not
/// fire reminders after the fact, no matter which flags are still
/// unset. Durations truncate toward zero, matching whole-hour /
/// whole-minute comparison.
pub fn due_reminders(booking: &Booking, now: DateTime<Utc>) -> Vec<ReminderKind> {
    let until = booking.meeting_at.with_timezone(&Utc) - now;
    if until < Duration::zero() {
        return Vec::new();
    }

    let hours = until.num_hours();
    let minutes = until.num_minutes();
    let mut due = Vec::new();

    if !booking.one_day_reminder_sent
        && (ONE_DAY_WINDOW_HOURS.0..=ONE_DAY_WINDOW_HOURS.1).contains(&hours)
    {
        due.push(ReminderKind::OneDay);
    }

    if !booking.two_hour_reminder_sent
        && (TWO_HOUR_WINDOW_MINUTES.0..=TWO_HOUR_WINDOW_MINUTES.1).contains(&minutes)
    {
        due.push(ReminderKind::TwoHour);
    }

    if !booking.thirty_min_reminder_sent
        && (THIRTY_MIN_WINDOW_MINUTES.0..=THIRTY_MIN_WINDOW_MINUTES.1).contains(&minutes)
    {
        due.push(ReminderKind::ThirtyMin);
    }

    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use revshare_core::types::SentFlag;

    /// A booking whose meeting is `minutes` minutes after `now`.
    fn booking_minutes_ahead(now: DateTime<Utc>, minutes: i64) -> Booking {
        let meeting_at = (now + Duration::minutes(minutes))
            .with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        revshare_test_utils::booking_fixture("b-1", meeting_at)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn exactly_24_hours_away_owes_one_day_reminder() {
        let booking = booking_minutes_ahead(now(), 24 * 60);
        assert_eq!(due_reminders(&booking, now()), vec![ReminderKind::OneDay]);
    }

    #[test]
    fn one_day_window_boundaries() {
        // 20h and 28h inclusive; 28h59m still truncates to 28.
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 20 * 60), now()),
            vec![ReminderKind::OneDay]
        );
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 28 * 60), now()),
            vec![ReminderKind::OneDay]
        );
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 28 * 60 + 59), now()),
            vec![ReminderKind::OneDay]
        );
        // 19h59m truncates to 19 hours: outside.
        assert!(due_reminders(&booking_minutes_ahead(now(), 19 * 60 + 59), now()).is_empty());
        assert!(due_reminders(&booking_minutes_ahead(now(), 29 * 60), now()).is_empty());
    }

    #[test]
    fn two_hour_window_boundaries() {
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 90), now()),
            vec![ReminderKind::TwoHour]
        );
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 120), now()),
            vec![ReminderKind::TwoHour]
        );
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 150), now()),
            vec![ReminderKind::TwoHour]
        );
        assert!(due_reminders(&booking_minutes_ahead(now(), 89), now()).is_empty());
        assert!(due_reminders(&booking_minutes_ahead(now(), 151), now()).is_empty());
    }

    #[test]
    fn thirty_min_window_boundaries() {
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 20), now()),
            vec![ReminderKind::ThirtyMin]
        );
        assert_eq!(
            due_reminders(&booking_minutes_ahead(now(), 45), now()),
            vec![ReminderKind::ThirtyMin]
        );
        assert!(due_reminders(&booking_minutes_ahead(now(), 19), now()).is_empty());
        assert!(due_reminders(&booking_minutes_ahead(now(), 46), now()).is_empty());
    }

    #[test]
    fn two_hour_window_does_not_imply_thirty_min() {
        // 120 minutes out: inside [90, 150], outside [20, 45].
        let due = due_reminders(&booking_minutes_ahead(now(), 120), now());
        assert_eq!(due, vec![ReminderKind::TwoHour]);
    }

    #[test]
    fn past_meetings_are_skipped_entirely() {
        let booking = booking_minutes_ahead(now(), -10);
        assert!(due_reminders(&booking, now()).is_empty());

        // Even a record with every flag still unset stays silent once
        // the meeting has passed.
        let long_past = booking_minutes_ahead(now(), -3 * 24 * 60);
        assert!(due_reminders(&long_past, now()).is_empty());
    }

    #[test]
    fn set_flags_gate_their_window() {
        let mut booking = booking_minutes_ahead(now(), 24 * 60);
        booking.mark(SentFlag::OneDayReminder);
        assert!(due_reminders(&booking, now()).is_empty());

        let mut booking = booking_minutes_ahead(now(), 30);
        booking.mark(SentFlag::ThirtyMinReminder);
        assert!(due_reminders(&booking, now()).is_empty());
    }

    #[test]
    fn imminent_meeting_owes_nothing() {
        // Inside no window: 5 minutes out.
        assert!(due_reminders(&booking_minutes_ahead(now(), 5), now()).is_empty());
        // And exactly at the meeting instant.
        assert!(due_reminders(&booking_minutes_ahead(now(), 0), now()).is_empty());
    }
}
