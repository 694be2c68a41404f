// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response strategies tried in order by the resolver.
//!
//! Each strategy either answers an utterance or passes. [`DefaultReply`]
//! always answers and is held separately by the resolver so the chain can
//! never come up empty.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::types::{CompletionRequest, MessageAction};
use folio_core::{FolioError, ProviderAdapter};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::knowledge::{self, KnowledgeBase};
use crate::limiter::{CallLimiter, LimiterPolicy, RateState};
use crate::persona::Persona;

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Keyword match in the knowledge base.
    Static,
    /// Text generated by the remote backend.
    Remote,
    /// The local call limiter refused the remote call.
    LimiterDenied,
    /// The remote backend reported a rate limit.
    RemoteRateLimited,
    /// Default invitation.
    Fallback,
}

/// One resolved answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: Option<MessageAction>,
    pub source: ReplySource,
}

impl Reply {
    /// A reply with no attached action.
    pub fn new(text: impl Into<String>, source: ReplySource) -> Self {
        Self {
            text: text.into(),
            action: None,
            source,
        }
    }

    /// Attaches `action` to the reply.
    pub fn with_action(mut self, action: MessageAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A candidate source of replies.
#[async_trait]
pub trait ResponseStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Answers `utterance`, or returns `None` to let the next strategy try.
    async fn attempt(&self, utterance: &str) -> Option<Reply>;
}

// --- Static keyword match ---

/// Answers from the keyword knowledge base.
pub struct StaticMatch {
    knowledge: KnowledgeBase,
}

impl StaticMatch {
    /// Answers from `knowledge`.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl ResponseStrategy for StaticMatch {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn attempt(&self, utterance: &str) -> Option<Reply> {
        let entry = self.knowledge.lookup(utterance)?;
        Some(Reply {
            text: entry.response.clone(),
            action: entry.action,
            source: ReplySource::Static,
        })
    }
}

// --- Remote completion ---

/// Settings for [`RemoteCompletion`].
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub model: String,
    pub max_output_tokens: Option<u32>,
    /// Bound on one completion call; on expiry the strategy passes.
    pub timeout: Duration,
    pub limiter: LimiterPolicy,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            model: String::new(),
            max_output_tokens: None,
            timeout: Duration::from_secs(15),
            limiter: LimiterPolicy::default(),
        }
    }
}

/// Asks the remote backend, behind the call limiter.
pub struct RemoteCompletion {
    provider: Arc<dyn ProviderAdapter>,
    persona: Persona,
    settings: RemoteSettings,
    limiter: Mutex<CallLimiter>,
}

impl RemoteCompletion {
    /// Wraps `provider`; the limiter's first window opens now.
    pub fn new(provider: Arc<dyn ProviderAdapter>, persona: Persona, settings: RemoteSettings) -> Self {
        let limiter = CallLimiter::new(settings.limiter, Instant::now());
        Self {
            provider,
            persona,
            settings,
            limiter: Mutex::new(limiter),
        }
    }

    /// Snapshot of the limiter's counter.
    pub async fn rate_state(&self) -> RateState {
        self.limiter.lock().await.state()
    }

    async fn call(&self, utterance: &str) -> Result<String, FolioError> {
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            prompt: self.persona.compose_prompt(utterance),
            max_output_tokens: self.settings.max_output_tokens,
        };

        match tokio::time::timeout(self.settings.timeout, self.provider.complete(request)).await {
            Ok(result) => result.map(|response| response.text),
            Err(_) => Err(FolioError::Timeout {
                duration: self.settings.timeout,
            }),
        }
    }
}

#[async_trait]
impl ResponseStrategy for RemoteCompletion {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn attempt(&self, utterance: &str) -> Option<Reply> {
        let admitted = self.limiter.lock().await.try_acquire(Instant::now());
        if !admitted {
            return Some(Reply::new(knowledge::LIMITER_DENIED_REPLY, ReplySource::LimiterDenied));
        }

        match self.call(utterance).await {
            Ok(text) => {
                debug!(provider = self.provider.name(), "remote completion answered");
                Some(Reply::new(text, ReplySource::Remote))
            }
            Err(e) if e.is_rate_limited() => {
                warn!(provider = self.provider.name(), error = %e, "remote backend rate limited");
                Some(Reply::new(
                    knowledge::REMOTE_RATE_LIMITED_REPLY,
                    ReplySource::RemoteRateLimited,
                ))
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "remote completion failed, falling back");
                None
            }
        }
    }
}

// --- Default ---

/// The reply of last resort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultReply {
    text: String,
}

impl DefaultReply {
    /// Always answers with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Always available.
    pub fn reply(&self) -> Reply {
        Reply::new(self.text.clone(), ReplySource::Fallback)
    }
}

impl Default for DefaultReply {
    fn default() -> Self {
        Self::new(knowledge::DEFAULT_REPLY)
    }
}

#[async_trait]
impl ResponseStrategy for DefaultReply {
    fn name(&self) -> &'static str {
        "default"
    }

    async fn attempt(&self, _utterance: &str) -> Option<Reply> {
        Some(self.reply())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::MockCompletion;
    use tracing_test::traced_test;

    fn persona() -> Persona {
        Persona::from_text("PREAMBLE", "Haryiank", 100)
    }

    fn remote(mock: &Arc<MockCompletion>, settings: RemoteSettings) -> RemoteCompletion {
        RemoteCompletion::new(mock.clone(), persona(), settings)
    }

    #[tokio::test]
    async fn static_match_passes_on_unrelated_text() {
        let strategy = StaticMatch::new(KnowledgeBase::resume("Haryiank"));
        assert!(strategy.attempt("hello").await.is_none());

        let reply = strategy.attempt("Resume please").await.unwrap();
        assert_eq!(reply.source, ReplySource::Static);
        assert_eq!(reply.action, Some(MessageAction::OfferDownload));
    }

    #[tokio::test]
    async fn remote_success_returns_text_verbatim() {
        let mock = Arc::new(MockCompletion::with_texts(vec!["  He knows Rust. ".into()]));
        let reply = remote(&mock, RemoteSettings::default()).attempt("skills?").await.unwrap();

        assert_eq!(reply.text, "  He knows Rust. ");
        assert_eq!(reply.action, None);
        assert_eq!(reply.source, ReplySource::Remote);
    }

    #[tokio::test]
    async fn remote_prompt_carries_preamble_and_utterance() {
        let mock = Arc::new(MockCompletion::new());
        remote(&mock, RemoteSettings::default()).attempt("Any hobbies?").await;

        let prompts = mock.prompts().await;
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("PREAMBLE"));
        assert!(prompts[0].contains("\"Any hobbies?\""));
    }

    #[tokio::test]
    async fn remote_rate_limit_maps_to_canned_text() {
        let mock = Arc::new(MockCompletion::new());
        mock.push_error(FolioError::RateLimited {
            message: "quota".into(),
        })
        .await;

        let reply = remote(&mock, RemoteSettings::default()).attempt("hi").await.unwrap();
        assert_eq!(reply.text, knowledge::REMOTE_RATE_LIMITED_REPLY);
        assert_eq!(reply.source, ReplySource::RemoteRateLimited);
    }

    #[tokio::test]
    async fn remote_generic_failure_passes() {
        let mock = Arc::new(MockCompletion::new());
        mock.push_error(FolioError::Provider {
            message: "RATE_LIMIT_EXCEEDED 429 in text only".into(),
            source: None,
        })
        .await;

        assert!(remote(&mock, RemoteSettings::default()).attempt("hi").await.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn remote_failure_is_logged_not_surfaced() {
        let mock = Arc::new(MockCompletion::new());
        mock.push_error(FolioError::Provider {
            message: "connection refused".into(),
            source: None,
        })
        .await;

        assert!(remote(&mock, RemoteSettings::default()).attempt("hi").await.is_none());
        assert!(logs_contain("remote completion failed"));
        assert!(logs_contain("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn remote_timeout_passes() {
        let mock = Arc::new(MockCompletion::new().with_latency(Duration::from_secs(120)));
        let settings = RemoteSettings {
            timeout: Duration::from_secs(5),
            ..RemoteSettings::default()
        };

        assert!(remote(&mock, settings).attempt("hi").await.is_none());
    }

    #[tokio::test]
    async fn limiter_denial_skips_the_provider() {
        let mock = Arc::new(MockCompletion::new());
        let settings = RemoteSettings {
            limiter: LimiterPolicy {
                window: Duration::from_secs(60),
                max_calls: 1,
            },
            ..RemoteSettings::default()
        };
        let strategy = remote(&mock, settings);

        assert_eq!(strategy.attempt("one").await.unwrap().source, ReplySource::Remote);
        let denied = strategy.attempt("two").await.unwrap();
        assert_eq!(denied.source, ReplySource::LimiterDenied);
        assert_eq!(denied.text, knowledge::LIMITER_DENIED_REPLY);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_calls_still_count_against_the_window() {
        let mock = Arc::new(MockCompletion::new());
        mock.push_error(FolioError::Provider {
            message: "down".into(),
            source: None,
        })
        .await;
        let strategy = remote(&mock, RemoteSettings::default());

        assert!(strategy.attempt("hi").await.is_none());
        assert_eq!(strategy.rate_state().await.call_count, 1);
    }

    #[tokio::test]
    async fn default_reply_always_answers() {
        let fallback = DefaultReply::default();
        let reply = fallback.attempt("anything").await.unwrap();
        assert_eq!(reply.text, knowledge::DEFAULT_REPLY);
        assert_eq!(reply.source, ReplySource::Fallback);
    }
}
