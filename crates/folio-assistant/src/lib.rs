// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Portfolio assistant core.
//!
//! An utterance is resolved by an ordered chain of strategies:
//!
//! 1. **Static match**: lower-cased keyword lookup (resume, CV, download, ...)
//!    returning a canned reply that offers the resume download.
//! 2. **Remote completion**: persona preamble plus utterance sent to the
//!    configured backend, gated by a fixed-window [`CallLimiter`].
//! 3. **Default reply**: a fixed invitation that always answers.
//!
//! [`Assistant`] wraps the chain with the conversation store, the reply delay
//! and the composing indicator.

pub mod conversation;
pub mod knowledge;
pub mod limiter;
pub mod persona;
pub mod resolver;
pub mod session;
pub mod strategy;

pub use conversation::Conversation;
pub use folio_config::Profile;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use limiter::{CallLimiter, LimiterPolicy, RateState};
pub use persona::Persona;
pub use resolver::Resolver;
pub use session::Assistant;
pub use strategy::{DefaultReply, RemoteCompletion, RemoteSettings, Reply, ReplySource, ResponseStrategy, StaticMatch};
