// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Playbook document rendering.
//!
//! The playbook is a standalone HTML file attached to confirmation
//! emails: research sections plus the five sample cold emails.

use revshare_core::types::{CompanyResearch, DealSize};

/// Render the outbound playbook document for a researched company.
pub fn render_playbook(
    research: &CompanyResearch,
    hook: &str,
    value_proposition: &str,
    website: &str,
    deal_size: DealSize,
    challenge: Option<&str>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 0 auto; padding: 40px 20px; color: #1a1a1a; line-height: 1.6; }}
    .header {{ text-align: center; margin-bottom: 40px; padding-bottom: 30px; border-bottom: 2px solid #3b82f6; }}
    h2 {{ color: #3b82f6; margin-top: 40px; border-bottom: 1px solid #e5e5e5; padding-bottom: 10px; }}
    .overview {{ background: #f8fafc; border-left: 4px solid #3b82f6; padding: 20px; margin: 20px 0; }}
    .email-card {{ background: #f8fafc; border: 1px solid #e5e5e5; border-radius: 12px; padding: 20px; margin: 20px 0; }}
    .email-subject {{ font-weight: 600; margin-bottom: 10px; }}
    .email-body {{ background: #fff; padding: 15px; border-radius: 8px; border: 1px solid #e5e5e5; white-space: pre-wrap; font-size: 14px; }}
    .cta {{ background: #3b82f6; color: #fff; padding: 30px; border-radius: 12px; text-align: center; margin-top: 40px; }}
  </style>
</head>
<body>
  <div class="header">
    <h1>Custom Outbound Playbook</h1>
    <p>Prepared exclusively for {company}</p>
  </div>

  <h2>Overview</h2>
  <div class="overview">
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Website:</strong> {website}</p>
    <p><strong>Average Deal Size:</strong> {deal_size}</p>
    <p><strong>Current Challenge:</strong> {challenge}</p>
  </div>
  <p>{description}</p>
  <p><strong>{hook}</strong></p>
  <p>{value_proposition}</p>
"#,
        company = research.company_name,
        description = research.company_description,
        challenge = challenge.unwrap_or("not stated"),
    ));

    push_list_section(
        &mut html,
        "Target Audience Pain Points",
        &research.target_audience.pain_points,
    );
    push_list_section(
        &mut html,
        "Target Market Characteristics",
        &research.target_audience.characteristics,
    );
    push_list_section(
        &mut html,
        "Technographic Signals",
        &research.technographic_signals,
    );
    push_list_section(
        &mut html,
        "Behavioral Indicators",
        &research.behavioral_indicators,
    );

    html.push_str("\n  <h2>Sample Cold Emails</h2>\n");
    for (index, email) in research.sample_emails.iter().enumerate() {
        html.push_str(&format!(
            r#"  <div class="email-card">
    <p><strong>Email {number}</strong> &middot; <em>{angle}</em></p>
    <div class="email-subject">Subject: {subject}</div>
    <div class="email-body">{body}</div>
  </div>
"#,
            number = index + 1,
            angle = email.angle,
            subject = email.subject,
            body = email.body,
        ));
    }

    html.push_str(&format!(
        r#"
  <div class="cta">
    <h2 style="color: #fff; border: none;">Ready to Launch?</h2>
    <p>On our call we'll build a complete outbound strategy tailored to {company}.</p>
    <p><strong>Remember: we only get paid when you get paid.</strong></p>
  </div>
</body>
</html>
"#,
        company = research.company_name,
    ));

    html
}

fn push_list_section(html: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!("\n  <h2>{heading}</h2>\n  <ul>\n"));
    for item in items {
        html.push_str(&format!("    <li>{item}</li>\n"));
    }
    html.push_str("  </ul>\n");
}
