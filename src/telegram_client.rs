use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::notification::NotificationPayload;
use crate::video::is_present;

#[derive(Clone)]
pub struct TelegramClient {
    http_client: Client,
    base_url: String,
    bot_token: Option<SecretString>,
    default_chat_id: Option<String>,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Result of a single delivery attempt. Only `Delivered` counts as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    NotConfigured(&'static str),
    Rejected(String),
    Timeout,
    TransportError(String),
    MalformedResponse(String),
}

impl std::fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryOutcome::Delivered => write!(f, "Message delivered to Telegram."),
            DeliveryOutcome::NotConfigured(setting) => {
                write!(f, "Telegram delivery skipped, {setting} is not configured.")
            }
            DeliveryOutcome::Rejected(reason) => write!(f, "Telegram API error: {reason}"),
            DeliveryOutcome::Timeout => write!(f, "Timed out sending the message to Telegram."),
            DeliveryOutcome::TransportError(detail) => {
                write!(f, "Failed to reach Telegram: {detail}")
            }
            DeliveryOutcome::MalformedResponse(detail) => {
                write!(f, "Unexpected response from Telegram: {detail}")
            }
        }
    }
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeliveryOutcome::Timeout
        } else {
            // The request URL carries the bot token.
            DeliveryOutcome::TransportError(err.without_url().to_string())
        }
    }
}

impl TelegramClient {
    pub fn new(
        base_url: String,
        bot_token: Option<SecretString>,
        default_chat_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.filter(|t| is_present(t)),
            default_chat_id: default_chat_id.filter(|c| is_present(c)),
        })
    }

    /// Renders `payload` and sends it to the default chat.
    #[tracing::instrument(name = "Notifying Telegram", skip(self, payload), fields(kind = payload.kind()))]
    pub async fn notify(&self, payload: &NotificationPayload) -> bool {
        self.send_message(&payload.render(), None).await
    }

    /// Best-effort send: every failure is logged and reported as `false`.
    pub async fn send_message(&self, text: &str, chat_id: Option<&str>) -> bool {
        let outcome = self.deliver(text, chat_id).await;

        match &outcome {
            DeliveryOutcome::Delivered => tracing::info!("{}", outcome),
            DeliveryOutcome::NotConfigured(_) => tracing::warn!("{}", outcome),
            _ => tracing::error!(error.message = %outcome, "Telegram delivery failed"),
        }

        outcome.is_delivered()
    }

    /// Makes at most one request; never retries.
    pub async fn deliver(&self, text: &str, chat_id: Option<&str>) -> DeliveryOutcome {
        let Some(bot_token) = &self.bot_token else {
            return DeliveryOutcome::NotConfigured("the bot token");
        };
        let Some(chat_id) = chat_id
            .filter(|c| is_present(*c))
            .or(self.default_chat_id.as_deref())
        else {
            return DeliveryOutcome::NotConfigured("the chat id");
        };

        let url = format!("{}/bot{}/sendMessage", self.base_url, bot_token.expose_secret());
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        tracing::info!(chat_id, "Sending message to Telegram");
        let response = match self.http_client.post(url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => return DeliveryOutcome::from_transport(err),
        };

        let status = response.status();
        let raw_body = match response.bytes().await {
            Ok(raw_body) => raw_body,
            Err(err) => return DeliveryOutcome::from_transport(err),
        };
        let parsed = serde_json::from_slice::<SendMessageResponse>(&raw_body);

        if !status.is_success() {
            let reason = parsed
                .ok()
                .and_then(|r| r.description)
                .unwrap_or_else(|| format!("HTTP status {status}"));
            return DeliveryOutcome::Rejected(reason);
        }

        match parsed {
            Ok(SendMessageResponse { ok: true, .. }) => DeliveryOutcome::Delivered,
            Ok(SendMessageResponse { description, .. }) => DeliveryOutcome::Rejected(
                description.unwrap_or_else(|| "Unknown error".to_string()),
            ),
            Err(err) => DeliveryOutcome::MalformedResponse(err.to_string()),
        }
    }
}
