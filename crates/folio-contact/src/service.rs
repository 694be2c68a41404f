// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact submission: the owner's notification first, then the optional
//! acknowledgement to the visitor.

use std::sync::Arc;

use folio_config::FolioConfig;
use folio_core::types::MailRequest;
use folio_core::{FolioError, MailAdapter};
use tracing::{info, warn};

use crate::emailjs::ensure_configured;
use crate::form::{auto_reply_body, ContactForm, Signature};

/// Shown to the visitor once the owner's notification went out.
pub const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

const AUTO_REPLY_SUBJECT: &str = "Thank you for contacting me!";

/// What happened to the acknowledgement email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoReply {
    NotConfigured,
    Sent,
    /// Delivery failed; the submission itself still succeeded.
    Failed,
}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub auto_reply: AutoReply,
}

/// Delivers contact submissions through a [`MailAdapter`].
pub struct ContactService {
    mailer: Arc<dyn MailAdapter>,
    template_id: String,
    auto_reply_template_id: Option<String>,
    signature: Signature,
}

impl ContactService {
    /// Sends notifications with `template_id` and no auto-reply.
    pub fn new(mailer: Arc<dyn MailAdapter>, template_id: impl Into<String>) -> Self {
        Self {
            mailer,
            template_id: template_id.into(),
            auto_reply_template_id: None,
            signature: Signature::default(),
        }
    }

    /// Also acknowledges each submission with `template_id`.
    pub fn with_auto_reply(mut self, template_id: impl Into<String>) -> Self {
        self.auto_reply_template_id = Some(template_id.into());
        self
    }

    /// Signs auto-replies with `signature`.
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    /// Wires the service from `[contact]`, signing auto-replies as the
    /// configured owner. Missing required keys are reported by name.
    pub fn from_config(config: &FolioConfig, mailer: Arc<dyn MailAdapter>) -> Result<Self, FolioError> {
        let contact = &config.contact;
        ensure_configured(contact)?;

        let mut service = Self::new(mailer, contact.template_id.clone().unwrap_or_default())
            .with_signature(Signature::from(config.owner()));
        if let Some(id) = contact.auto_reply_template_id.as_deref().map(str::trim) {
            if !id.is_empty() {
                service = service.with_auto_reply(id);
            }
        }
        Ok(service)
    }

    /// Validates and delivers `form`.
    ///
    /// Only a failure of the owner's notification fails the submission.
    pub async fn submit(&self, form: &ContactForm) -> Result<Submission, FolioError> {
        form.validate()?;

        let notification = MailRequest::new(&self.template_id)
            .param("name", form.name.trim())
            .param("email", form.email.trim())
            .param("message", form.message.trim());
        self.mailer.send(notification).await.inspect_err(|e| {
            warn!(error = %e, mailer = self.mailer.name(), "contact notification failed");
        })?;
        info!(mailer = self.mailer.name(), "contact notification sent");

        let auto_reply = match &self.auto_reply_template_id {
            None => AutoReply::NotConfigured,
            Some(template_id) => self.send_auto_reply(template_id, form).await,
        };
        Ok(Submission { auto_reply })
    }

    async fn send_auto_reply(&self, template_id: &str, form: &ContactForm) -> AutoReply {
        let request = MailRequest::new(template_id)
            .param("user_name", form.name.trim())
            .param("user_email", form.email.trim())
            .param("reply_to", form.email.trim())
            .param("from_name", &self.signature.full_name)
            .param("from_email", &self.signature.email)
            .param("subject", AUTO_REPLY_SUBJECT)
            .param("message_body", auto_reply_body(form, &self.signature));

        match self.mailer.send(request).await {
            Ok(()) => AutoReply::Sent,
            Err(e) => {
                warn!(error = %e, user_email = %form.email.trim(), "auto-reply failed");
                AutoReply::Failed
            }
        }
    }
}

/// User-facing text for a failed submission.
pub fn failure_notice(error: &FolioError, owner_email: &str) -> String {
    match error {
        FolioError::Validation(detail) => format!("Please check the form: {detail}."),
        FolioError::Config(_) => "Email configuration is missing. Please contact the developer.".to_string(),
        FolioError::Mail {
            status: Some(400), ..
        } => "There was an issue with the message format. Please check all fields and try again.".to_string(),
        FolioError::Mail {
            status: Some(422), ..
        } => format!(
            "Email service configuration error. The message couldn't be sent. Please contact me directly at {owner_email}"
        ),
        FolioError::Mail {
            status: Some(404), ..
        } => format!("Email service not found. Please contact me directly at {owner_email}"),
        _ => format!("Failed to send message. Please try again or contact me directly at {owner_email}"),
    }
}
