// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact form delivery for the Folio portfolio.
//!
//! A [`ContactForm`] is validated, sent to the owner through a
//! [`MailAdapter`](folio_core::MailAdapter) and, when an auto-reply template is
//! configured, acknowledged back to the visitor. [`EmailJsSender`] is the
//! production adapter.

pub mod emailjs;
pub mod form;
pub mod service;

pub use emailjs::EmailJsSender;
pub use form::{ContactForm, Signature};
pub use service::{failure_notice, AutoReply, ContactService, Submission, SENT_NOTICE};
