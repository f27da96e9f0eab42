// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lead-magnet topic rotation and the personal-email denylist.

use chrono::{Datelike, NaiveDate};

use revshare_core::types::Topic;

/// Personal email providers rejected by the lead-magnet endpoint.
/// The guide is personalized from the company domain, so a free-mail
/// address has nothing to personalize against.
pub const PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "msn.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "aol.com",
    "protonmail.com",
    "proton.me",
    "zoho.com",
    "yandex.com",
    "mail.com",
    "gmx.com",
    "tutanota.com",
    "fastmail.com",
    "hey.com",
];

/// The rotating topic list. The active topic cycles by day of year.
pub const TOPICS: &[Topic] = &[
    Topic {
        id: "5-signs-ready",
        title: "5 Signs Your Offer is Ready for Cold Email",
        emoji: "\u{1F3AF}",
        focus: "5 signs that indicate a B2B offer is ready for cold email outreach",
    },
    Topic {
        id: "domains-burned",
        title: "Why Your Email Domains Are Burned (And How to Fix It)",
        emoji: "\u{1F525}",
        focus: "reasons why email domains get burned or blacklisted and how to prevent and fix it",
    },
    Topic {
        id: "multi-channel",
        title: "10 Signs You Need Multi-Channel Outreach",
        emoji: "\u{1F4E1}",
        focus: "signs that a business needs multi-channel outreach instead of a single channel",
    },
    Topic {
        id: "cold-email-mistakes",
        title: "7 Cold Email Mistakes Killing Your Reply Rates",
        emoji: "\u{1F480}",
        focus: "common cold email mistakes that kill reply rates and how to fix them",
    },
    Topic {
        id: "icp-wrong",
        title: "Your ICP is Wrong: 5 Signs You're Targeting the Wrong People",
        emoji: "\u{1F3AA}",
        focus: "signs that a business is targeting the wrong ideal customer profile in outreach",
    },
    Topic {
        id: "outbound-timing",
        title: "The Perfect Time to Start Outbound (It's Not When You Think)",
        emoji: "\u{23F0}",
        focus: "when a B2B business should start outbound sales and what conditions need to be met",
    },
    Topic {
        id: "agency-vs-inhouse",
        title: "Agency vs In-House Sales: Which is Right for You?",
        emoji: "\u{2696}\u{FE0F}",
        focus: "pros and cons of hiring an agency vs building an in-house outbound sales team",
    },
];

/// The topic active on `date`. Pure function: day of year modulo the
/// list length, so the rotation is stable within a day and cyclic
/// across the list.
pub fn topic_for(date: NaiveDate) -> &'static Topic {
    let index = date.ordinal() as usize % TOPICS.len();
    &TOPICS[index]
}

/// Whether the address belongs to a known personal-mail provider.
/// Addresses without a domain part count as personal.
pub fn is_personal_email(email: &str) -> bool {
    match domain_of(email) {
        Some(domain) => PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str()),
        None => true,
    }
}

/// The lowercased domain part of an email address, if present.
pub fn domain_of(email: &str) -> Option<String> {
    let domain = email.split('@').nth(1)?.trim().to_lowercase();
    if domain.is_empty() { None } else { Some(domain) }
}
