// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Folio assistant.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Provider,
    Downloader,
    Mailer,
}

// --- Conversation types ---

/// Who authored a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Tag telling the presentation layer to render an auxiliary control next
/// to a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MessageAction {
    /// Offer a resume download trigger.
    OfferDownload,
}

/// One entry in a conversation transcript.
///
/// Messages are created once and never edited; the transcript only appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
}

impl Message {
    /// Creates a user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
            action: None,
        }
    }

    /// Creates an assistant message stamped with the current time.
    pub fn assistant(text: impl Into<String>, action: Option<MessageAction>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
            action,
        }
    }

    /// Local wall-clock time of the message as `HH:MM`.
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }

    /// True when the presentation layer should show a download trigger.
    pub fn offers_download(&self) -> bool {
        self.role == Role::Assistant && self.action == Some(MessageAction::OfferDownload)
    }
}

// --- Provider types ---

/// A single-prompt request to a completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier, e.g. `gemini-2.0-flash-exp`.
    pub model: String,
    /// Fully composed prompt text.
    pub prompt: String,
    /// Optional cap on generated tokens.
    pub max_output_tokens: Option<u32>,
}

/// Token accounting reported by a provider, when available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
}

/// A completed response from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub model: String,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

// --- Download types ---

/// A static asset a visitor can download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Where the asset lives.
    pub source: PathBuf,
    /// File name to save it under.
    pub file_name: String,
}

// --- Mail types ---

/// A templated email handed to a mail adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MailRequest {
    /// Template identifier at the mail service.
    pub template_id: String,
    /// Template variables.
    pub params: BTreeMap<String, String>,
}

impl MailRequest {
    /// An empty request for `template_id`.
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a template variable.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
