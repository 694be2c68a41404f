// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact form input and the acknowledgement text built from it.

use std::sync::LazyLock;

use folio_config::Profile;
use folio_core::FolioError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters of the visitor's message quoted back in the auto-reply.
pub const QUOTE_LIMIT: usize = 150;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// What a visitor submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Builds a form from raw field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<(), FolioError> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is required".to_string());
        }
        if self.email.trim().is_empty() {
            problems.push("email is required".to_string());
        } else if !EMAIL_PATTERN.is_match(self.email.trim()) {
            problems.push(format!("'{}' is not a valid email address", self.email.trim()));
        }
        if self.message.trim().is_empty() {
            problems.push("message is required".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(FolioError::Validation(problems.join("; ")))
        }
    }
}

/// The first [`QUOTE_LIMIT`] characters of `message`, with `...` when cut.
pub fn quote(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(QUOTE_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Who signs the auto-reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub full_name: String,
    pub email: String,
    pub tagline: String,
}

impl From<&Profile> for Signature {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            tagline: profile.tagline.clone(),
        }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::from(&Profile::default())
    }
}

/// Body of the acknowledgement sent back to the visitor.
pub fn auto_reply_body(form: &ContactForm, signature: &Signature) -> String {
    format!(
        "Hi {name},\n\n\
         Thank you for reaching out through my portfolio!\n\n\
         I've received your message and will get back to you within 24-48 hours. \
         In the meantime, feel free to check out my other projects and connect with me on social media.\n\n\
         Your message: \"{quoted}\"\n\n\
         Best regards,\n\
         {signer}\n\
         {tagline}\
         ---\n\
         This is an automated response. Please do not reply to this email.",
        name = form.name.trim(),
        quoted = quote(&form.message),
        signer = signature.full_name,
        tagline = tagline_block(&signature.tagline),
    )
}

fn tagline_block(tagline: &str) -> String {
    if tagline.trim().is_empty() {
        "\n".to_string()
    } else {
        format!("{}\n\n", tagline.trim())
    }
}
