// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot subcommands: `ask`, `contact` and `config`.

use std::sync::Arc;

use colored::Colorize;
use folio_assistant::Assistant;
use folio_config::FolioConfig;
use folio_contact::{failure_notice, AutoReply, ContactForm, ContactService, EmailJsSender, SENT_NOTICE, Submission};
use folio_core::{FolioError, MailAdapter};
use folio_gemini::API_KEY_ENV;

use crate::backend;

/// `folio ask`: resolves one utterance and prints the reply.
pub async fn run_ask(config: FolioConfig, utterance: &str) -> Result<(), FolioError> {
    let mut config = config;
    // No one is watching a composing indicator here.
    config.assistant.reply_delay_ms = 0;

    let assistant = Assistant::from_config(&config, backend::provider(&config)).await;
    match assistant.send(utterance).await {
        Some(reply) => {
            println!("{}", reply.text);
            if reply.action.is_some() {
                println!("{}", "run `folio chat` and type /download to save the resume".dimmed());
            }
            Ok(())
        }
        None => Err(FolioError::Validation("utterance is blank".into())),
    }
}

/// `folio contact`: submits the contact form.
pub async fn run_contact(config: FolioConfig, form: ContactForm) -> Result<(), FolioError> {
    match deliver(&config, &form).await {
        Ok(submission) => {
            println!("{}", SENT_NOTICE.green());
            if submission.auto_reply == AutoReply::Failed {
                println!("{}", "(the confirmation email to you could not be sent)".dimmed());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", failure_notice(&e, &config.owner().email).red());
            Err(e)
        }
    }
}

async fn deliver(config: &FolioConfig, form: &ContactForm) -> Result<Submission, FolioError> {
    let mailer: Arc<dyn MailAdapter> = Arc::new(EmailJsSender::from_config(&config.contact)?);
    ContactService::from_config(config, mailer)?.submit(form).await
}

/// `folio config`: prints the effective configuration with secrets masked.
pub fn run_config(config: &FolioConfig) {
    println!("{}", "configuration ok".bold().green());
    for (key, value) in summary(config) {
        println!("  {} = {value}", key.cyan());
    }
}

/// Key/value lines of the effective configuration.
pub fn summary(config: &FolioConfig) -> Vec<(&'static str, String)> {
    let api_key = match &config.gemini.api_key {
        Some(key) if !key.trim().is_empty() => redact(key),
        _ if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) => format!("(from {API_KEY_ENV})"),
        _ => "(unset, canned replies only)".to_string(),
    };
    let optional = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());
    let profile_source = if config.profile.is_some() { "configured" } else { "built-in" };

    vec![
        ("assistant.name", config.assistant.name.clone()),
        ("assistant.log_level", config.assistant.log_level.clone()),
        ("assistant.reply_delay_ms", config.assistant.reply_delay_ms.to_string()),
        ("assistant.request_timeout_secs", config.assistant.request_timeout_secs.to_string()),
        ("assistant.persona_file", optional(&config.assistant.persona_file)),
        ("gemini.model", config.gemini.model.clone()),
        ("gemini.base_url", config.gemini.base_url.clone()),
        ("gemini.api_key", api_key),
        ("limiter.window_secs", config.limiter.window_secs.to_string()),
        ("limiter.max_calls", config.limiter.max_calls.to_string()),
        ("resume.asset_path", config.resume.asset_path.clone()),
        ("contact.service_id", optional(&config.contact.service_id)),
        ("contact.template_id", optional(&config.contact.template_id)),
        (
            "contact.public_key",
            config.contact.public_key.as_deref().map(redact).unwrap_or_else(|| "(unset)".to_string()),
        ),
        ("contact.auto_reply_template_id", optional(&config.contact.auto_reply_template_id)),
        ("profile", profile_source.to_string()),
        ("profile.full_name", config.owner().full_name.clone()),
        ("profile.email", config.owner().email.clone()),
    ]
}

/// Keeps the first four characters of a secret.
fn redact(secret: &str) -> String {
    let head: String = secret.chars().take(4).collect();
    format!("{head}****")
}
