// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-zero windows and non-empty identifiers.

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// every collected validation error (does not fail fast).
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let owner = config.owner();
    if owner.first_name.trim().is_empty() {
        errors.push(validation("profile.first_name must not be empty"));
    }

    if owner.full_name.trim().is_empty() {
        errors.push(validation("profile.full_name must not be empty"));
    }

    if !owner.email.contains('@') {
        errors.push(ConfigError::Validation {
            message: format!("profile.email `{}` is not an email address", owner.email),
        });
    }

    if config.assistant.request_timeout_secs == 0 {
        errors.push(validation("assistant.request_timeout_secs must be at least 1"));
    }

    if config.assistant.max_words == 0 {
        errors.push(validation("assistant.max_words must be at least 1"));
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(validation("gemini.model must not be empty"));
    }

    if !config.gemini.base_url.starts_with("http://") && !config.gemini.base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "gemini.base_url `{}` must start with http:// or https://",
                config.gemini.base_url
            ),
        });
    }

    if config.limiter.window_secs == 0 {
        errors.push(validation("limiter.window_secs must be at least 1"));
    }

    if config.limiter.max_calls == 0 {
        errors.push(validation("limiter.max_calls must be at least 1"));
    }

    if config.resume.file_name.trim().is_empty() {
        errors.push(validation("resume.file_name must not be empty"));
    }

    if config.resume.file_name.contains('/') || config.resume.file_name.contains('\\') {
        errors.push(ConfigError::Validation {
            message: format!(
                "resume.file_name `{}` must be a bare file name",
                config.resume.file_name
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::Validation {
        message: message.to_string(),
    }
}
