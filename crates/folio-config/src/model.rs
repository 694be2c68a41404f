// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio portfolio assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

use crate::profile::{self, Profile};

/// Top-level Folio configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Assistant identity and reply pacing.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Gemini completion backend settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Client-side call limiter for the completion backend.
    #[serde(default)]
    pub limiter: LimiterConfig,

    /// Downloadable resume asset.
    #[serde(default)]
    pub resume: ResumeConfig,

    /// Contact form mail delivery.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Portfolio owner. Absent means the built-in profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl FolioConfig {
    /// The configured owner profile, or the built-in one.
    pub fn owner(&self) -> &Profile {
        self.profile.as_ref().unwrap_or(&*profile::BUILT_IN)
    }

    /// The greeting, falling back to one built from the owner's profile.
    pub fn greeting_text(&self) -> String {
        match &self.assistant.greeting {
            Some(g) if !g.trim().is_empty() => g.clone(),
            _ => {
                let owner = self.owner();
                format!(
                    "Hi! I'm {}'s assistant. Ask me about {} experience, skills, or projects! 🚀",
                    owner.first_name, owner.possessive
                )
            }
        }
    }
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name of the assistant widget.
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Greeting shown when the widget mounts. Defaults to a line naming the owner.
    #[serde(default)]
    pub greeting: Option<String>,

    /// Pause before a reply is delivered, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Upper bound on a single completion call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Path to a text file that replaces the built-in persona preamble.
    #[serde(default)]
    pub persona_file: Option<String>,

    /// Word budget the model is asked to stay under.
    #[serde(default = "default_max_words")]
    pub max_words: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            log_level: default_log_level(),
            greeting: None,
            reply_delay_ms: default_reply_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            persona_file: None,
            max_words: default_max_words(),
        }
    }
}

fn default_assistant_name() -> String {
    "folio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_reply_delay_ms() -> u64 {
    800
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_max_words() -> u32 {
    100
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` falls back to the `GEMINI_API_KEY` environment
    /// variable; absent both, the assistant runs without a remote backend.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for completions.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Optional cap on generated tokens per reply.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_gemini_base_url(),
            max_output_tokens: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Fixed-window call limiter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimiterConfig {
    /// Window length in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Maximum remote calls admitted per window.
    #[serde(default = "default_max_calls")]
    pub max_calls: u32,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_calls: default_max_calls(),
        }
    }
}

fn default_window_secs() -> u64 {
    60
}

fn default_max_calls() -> u32 {
    15
}

/// Resume asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeConfig {
    /// Path of the resume file served to visitors.
    #[serde(default = "default_resume_path")]
    pub asset_path: String,

    /// File name the download is saved under.
    #[serde(default = "default_resume_file_name")]
    pub file_name: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            asset_path: default_resume_path(),
            file_name: default_resume_file_name(),
        }
    }
}

fn default_resume_path() -> String {
    "public/resume/Haryiank_Kumra_Resume.pdf".to_string()
}

fn default_resume_file_name() -> String {
    "Haryiank_Kumra_Resume.pdf".to_string()
}

/// Contact form delivery through EmailJS.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// EmailJS service identifier.
    #[serde(default)]
    pub service_id: Option<String>,

    /// Template for the message delivered to the owner.
    #[serde(default)]
    pub template_id: Option<String>,

    /// EmailJS public key.
    #[serde(default)]
    pub public_key: Option<String>,

    /// Template for the acknowledgement sent back to the visitor. `None` disables it.
    #[serde(default)]
    pub auto_reply_template_id: Option<String>,

    /// Base URL of the EmailJS REST API.
    #[serde(default = "default_emailjs_base_url")]
    pub base_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            auto_reply_template_id: None,
            base_url: default_emailjs_base_url(),
        }
    }
}

fn default_emailjs_base_url() -> String {
    "https://api.emailjs.com".to_string()
}
