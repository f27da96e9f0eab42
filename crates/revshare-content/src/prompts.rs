// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for the content generator.
//!
//! Each prompt instructs the model to answer in a strict JSON shape;
//! the parsers in `lib.rs` deserialize that shape tolerantly.

use revshare_core::types::{Booking, DealSize, ReminderKind, Topic};

/// Prompt for company research + booking personalization.
pub fn booking_content(website: &str, deal_size: DealSize, challenge: Option<&str>) -> String {
    let challenge = challenge.unwrap_or("not stated");
    format!(
        r#"You are an expert B2B sales strategist and cold email copywriter. A potential client has booked a call with RevShare, a company that handles the entire sales process for B2B consultants and takes a share of lifetime client revenue.

Here's what we know about them:
- Company Website: {website}
- Average Deal Size: {deal_size}
- Their Biggest Lead Generation Challenge: {challenge}

Based on the website URL, infer what the company likely does, then respond in this exact JSON format and nothing else:
{{
  "companyName": "inferred company name from website",
  "companyDescription": "brief description of what the company does",
  "targetAudience": {{
    "painPoints": ["five pain points"],
    "characteristics": ["four characteristics"]
  }},
  "technographicSignals": ["four signals"],
  "behavioralIndicators": ["four indicators"],
  "sampleEmails": [
    {{"subject": "short 2-3 word subject", "body": "personalized email under 100 words", "angle": "the angle this email uses"}}
  ],
  "personalizedHook": "one compelling line about how RevShare can help THIS company",
  "valueProposition": "2-3 sentences on how the revenue-share model benefits them given their deal size and challenge"
}}

Provide exactly five sampleEmails, each using a different outreach angle, written as if RevShare is reaching out to THEIR ideal clients. Keep each under 100 words, lead with relevance, use a conversational tone, and end with a soft call to action."#
    )
}

/// Prompt for a personalized reminder email.
pub fn reminder_copy(kind: ReminderKind, booking: &Booking, date_display: &str) -> String {
    let (timing, extra_instruction) = match kind {
        ReminderKind::OneDay => (
            "1 day before the call",
            "Include a teaser about what you've prepared for them",
        ),
        ReminderKind::TwoHour => (
            "2 hours before the call",
            "Include a quick checklist to prepare",
        ),
        ReminderKind::ThirtyMin => (
            "30 minutes before the call",
            "Create urgency and excitement",
        ),
    };

    let (company, description) = match &booking.enrichment {
        Some(enrichment) => {
            let research = enrichment.research();
            (
                research.company_name.as_str(),
                research.company_description.as_str(),
            )
        }
        None => ("their company", ""),
    };

    format!(
        r#"You are writing a reminder email for a booked strategy call. The email should be warm, personalized, and build excitement for the call.

Context:
- Recipient Name: {name}
- Company: {company}
- What they do: {description}
- Call Date: {date_display}
- Call Time: {time}
- Email Type: {timing}

Write a reminder email that is warm and personal (use their first name), references their business, builds anticipation, and feels like it's from a real person. {extra_instruction}.

Respond in JSON format and nothing else:
{{
  "subject": "short, personal subject line",
  "body": "the email body in plain text with line breaks"
}}"#,
        name = booking.name,
        time = booking.time,
    )
}

/// Prompt for a personalized lead-magnet guide on today's topic.
pub fn lead_magnet(email: &str, domain: &str, topic: &Topic) -> String {
    format!(
        r#"You are an expert B2B sales strategist for RevShare, a company that handles the entire sales process for B2B consultants on a revenue-share basis.

Someone just submitted their email to get a free guide. Their email is: {email}
Their company domain is: {domain} (website: https://{domain})

TODAY'S TOPIC: {title}
TOPIC FOCUS: {focus}

Based on the domain, infer what this company likely does, then create personalized content about TODAY'S TOPIC specifically for them.

Respond in this exact JSON format and nothing else:
{{
  "companyName": "inferred company name from domain",
  "companyDescription": "brief description of what they likely do",
  "title": "{title}",
  "emoji": "{emoji}",
  "sections": [
    {{"heading": "section heading related to the topic", "content": "2-3 sentences explaining this point", "personalizedTip": "how this applies to their business"}}
  ],
  "personalizedIntro": "a warm opening paragraph mentioning their company and why this topic matters for them",
  "callToAction": "a call to action to book a call with RevShare, connecting today's topic to their business"
}}

Provide exactly five sections. Make each specific and actionable; the personalized tips should reference their business."#,
        title = topic.title,
        emoji = topic.emoji,
        focus = topic.focus,
    )
}
