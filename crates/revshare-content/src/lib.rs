// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed content generation for the RevShare booking service.
//!
//! This crate implements [`ContentGenerator`] against the Anthropic
//! Messages API: company research and playbook generation at intake,
//! personalized reminder copy for the scheduler, and the daily
//! lead-magnet guide.

pub mod client;
pub mod extract;
pub mod lead_magnet;
pub mod playbook;
pub mod prompts;
pub mod types;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use revshare_config::RevshareConfig;
use revshare_core::types::{
    Booking, DealSize, Enrichment, EnrichmentV1, LeadMagnetContent, ReminderCopy, ReminderKind,
    Topic,
};
use revshare_core::{ContentGenerator, RevshareError};

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, BookingContentPayload, MessageRequest};

/// Max tokens for the short reminder-copy generations.
const REMINDER_MAX_TOKENS: u32 = 1024;

/// Max tokens for the lead-magnet guide.
const LEAD_MAGNET_MAX_TOKENS: u32 = 2048;

/// Anthropic-backed [`ContentGenerator`].
///
/// API key resolution order: config -> `ANTHROPIC_API_KEY` env var -> error.
pub struct AnthropicGenerator {
    client: AnthropicClient,
    max_tokens: u32,
}

impl AnthropicGenerator {
    /// Creates a new generator from the given configuration.
    pub fn new(config: &RevshareConfig) -> Result<Self, RevshareError> {
        let api_key = resolve_api_key(&config.anthropic.api_key)?;
        let client = AnthropicClient::new(
            api_key,
            config.anthropic.api_version.clone(),
            config.anthropic.model.clone(),
        )?;

        info!(
            model = config.anthropic.model,
            "Anthropic content generator initialized"
        );

        Ok(Self {
            client,
            max_tokens: config.anthropic.max_tokens,
        })
    }

    /// Creates a generator with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: AnthropicClient, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    async fn complete_text(
        &self,
        prompt: String,
        max_tokens: u32,
    ) -> Result<String, RevshareError> {
        let request = MessageRequest {
            model: self.client.default_model().to_string(),
            messages: vec![ApiMessage::user(prompt)],
            system: None,
            max_tokens,
            stream: false,
        };
        let response = self.client.complete_message(&request).await?;
        Ok(response.text())
    }

    /// Extract and deserialize the JSON object from a model response.
    fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, RevshareError> {
        let json = extract::extract_json_object(text).ok_or_else(|| RevshareError::Generator {
            message: "model response contained no JSON object".into(),
            source: None,
        })?;
        serde_json::from_str(json).map_err(|e| RevshareError::Generator {
            message: format!("failed to parse model JSON: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl ContentGenerator for AnthropicGenerator {
    async fn booking_content(
        &self,
        website: &str,
        deal_size: DealSize,
        challenge: Option<&str>,
    ) -> Result<Enrichment, RevshareError> {
        let prompt = prompts::booking_content(website, deal_size, challenge);
        let text = self.complete_text(prompt, self.max_tokens).await?;
        let payload: BookingContentPayload = Self::parse_payload(&text)?;

        let playbook_html = playbook::render_playbook(
            &payload.research,
            &payload.personalized_hook,
            &payload.value_proposition,
            website,
            deal_size,
            challenge,
        );

        info!(company = %payload.research.company_name, "booking content generated");

        Ok(Enrichment::V1(EnrichmentV1 {
            research: payload.research,
            hook: payload.personalized_hook,
            value_proposition: payload.value_proposition,
            playbook_html,
            extra: serde_json::Map::new(),
        }))
    }

    async fn reminder_copy(
        &self,
        kind: ReminderKind,
        booking: &Booking,
    ) -> Result<ReminderCopy, RevshareError> {
        let date_display = booking.date.format("%A, %B %-d, %Y").to_string();
        let prompt = prompts::reminder_copy(kind, booking, &date_display);
        let text = self.complete_text(prompt, REMINDER_MAX_TOKENS).await?;
        Self::parse_payload(&text)
    }

    async fn lead_magnet(
        &self,
        email: &str,
        domain: &str,
        topic: &Topic,
    ) -> Result<LeadMagnetContent, RevshareError> {
        let prompt = prompts::lead_magnet(email, domain, topic);
        let text = self.complete_text(prompt, LEAD_MAGNET_MAX_TOKENS).await?;
        let content: LeadMagnetContent = Self::parse_payload(&text)?;
        info!(company = %content.company_name, topic = topic.id, "lead magnet generated");
        Ok(content)
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, RevshareError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        RevshareError::Config(
            "Anthropic API key not found. Set anthropic.api_key in config or ANTHROPIC_API_KEY environment variable.".into(),
        )
    })
}
