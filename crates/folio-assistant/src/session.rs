// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-visitor assistant session.
//!
//! [`Assistant`] owns the conversation, the resolver chain and the composing
//! indicator. The user's message is recorded as soon as it is submitted and
//! the submission takes a turn number. Each turn then runs on its own task,
//! one turn at a time in turn order, so replies land in the order the
//! utterances were submitted and a caller that stops waiting does not leave
//! its utterance unanswered.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use folio_config::FolioConfig;
use folio_core::types::AssetRef;
use folio_core::{AssetDownloader, FolioError, Message, ProviderAdapter};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::conversation::Conversation;
use crate::knowledge::{self, KnowledgeBase};
use crate::limiter::LimiterPolicy;
use crate::persona::Persona;
use crate::resolver::Resolver;
use crate::strategy::{DefaultReply, RemoteCompletion, RemoteSettings, Reply, StaticMatch};

/// One visitor's chat session.
pub struct Assistant {
    shared: Arc<Shared>,
    resume: AssetRef,
}

/// State shared between the session and its in-flight turns.
struct Shared {
    transcript: Mutex<Transcript>,
    resolver: Resolver,
    /// Number of the turn currently allowed to resolve.
    serving: watch::Sender<u64>,
    pending: AtomicUsize,
    reply_delay: Duration,
}

struct Transcript {
    conversation: Conversation,
    next_turn: u64,
}

/// Decrements the pending counter when the turn finishes.
struct PendingGuard(Arc<Shared>);

impl PendingGuard {
    fn enter(shared: Arc<Shared>) -> Self {
        shared.pending.fetch_add(1, Ordering::SeqCst);
        Self(shared)
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.pending.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Hands the floor to the next turn, even if this one panicked.
struct TurnGuard<'a>(&'a watch::Sender<u64>);

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|turn| *turn += 1);
    }
}

impl Shared {
    async fn take_turn(&self, turn: u64, utterance: &str) -> Reply {
        let mut serving = self.serving.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting.
        let _ = serving.wait_for(|current| *current == turn).await;
        let _next = TurnGuard(&self.serving);

        let reply = self.resolver.resolve(utterance).await;
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }
        self.transcript
            .lock()
            .await
            .conversation
            .push(Message::assistant(reply.text.clone(), reply.action));
        reply
    }
}

impl Assistant {
    /// Assembles a session from its parts. The conversation starts with `greeting`.
    pub fn new(resolver: Resolver, greeting: impl Into<String>, reply_delay: Duration, resume: AssetRef) -> Self {
        let (serving, _) = watch::channel(0);
        let shared = Shared {
            transcript: Mutex::new(Transcript {
                conversation: Conversation::with_greeting(Message::assistant(greeting, None)),
                next_turn: 0,
            }),
            resolver,
            serving,
            pending: AtomicUsize::new(0),
            reply_delay,
        };
        Self {
            shared: Arc::new(shared),
            resume,
        }
    }

    /// Builds the session described by `config`.
    ///
    /// With `provider` absent the remote strategy is left out entirely and
    /// every unmatched utterance gets the default reply.
    pub async fn from_config(config: &FolioConfig, provider: Option<Arc<dyn ProviderAdapter>>) -> Self {
        let owner = config.owner();
        let mut resolver = Resolver::new(DefaultReply::new(knowledge::default_reply(&owner.first_name)))
            .with_strategy(Box::new(StaticMatch::new(KnowledgeBase::resume(&owner.first_name))));

        match provider {
            Some(provider) => {
                let persona = Persona::load(&config.assistant, owner).await;
                let settings = RemoteSettings {
                    model: config.gemini.model.clone(),
                    max_output_tokens: config.gemini.max_output_tokens,
                    timeout: Duration::from_secs(config.assistant.request_timeout_secs),
                    limiter: LimiterPolicy::from(&config.limiter),
                };
                info!(provider = provider.name(), model = %settings.model, "remote completion enabled");
                resolver = resolver.with_strategy(Box::new(RemoteCompletion::new(provider, persona, settings)));
            }
            None => info!("no completion backend configured, using canned replies only"),
        }

        let resume = AssetRef {
            source: PathBuf::from(&config.resume.asset_path),
            file_name: config.resume.file_name.clone(),
        };

        Self::new(
            resolver,
            config.greeting_text(),
            Duration::from_millis(config.assistant.reply_delay_ms),
            resume,
        )
    }

    /// Submits an utterance and waits for its reply to be delivered.
    ///
    /// Blank utterances are ignored and return `None`. Otherwise exactly one
    /// user message and one assistant message are appended, even if the
    /// returned future is dropped after the user message was recorded.
    pub async fn send(&self, utterance: &str) -> Option<Reply> {
        if utterance.trim().is_empty() {
            debug!("ignoring blank utterance");
            return None;
        }

        let pending = PendingGuard::enter(Arc::clone(&self.shared));
        let turn = {
            let mut transcript = self.shared.transcript.lock().await;
            transcript.conversation.push(Message::user(utterance));
            transcript.next_turn += 1;
            transcript.next_turn - 1
        };

        let shared = Arc::clone(&self.shared);
        let utterance = utterance.to_string();
        let handle = tokio::spawn(async move {
            let _pending = pending;
            shared.take_turn(turn, &utterance).await
        });

        match handle.await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(error = %e, turn, "reply task failed");
                None
            }
        }
    }

    /// True while at least one send is waiting for its reply.
    pub fn is_composing(&self) -> bool {
        self.shared.pending.load(Ordering::SeqCst) > 0
    }

    /// Snapshot of the transcript, oldest first.
    pub async fn messages(&self) -> Vec<Message> {
        self.shared.transcript.lock().await.conversation.messages().to_vec()
    }

    /// Suggested utterances offered under the transcript.
    pub fn quick_replies(&self) -> &'static [&'static str] {
        &knowledge::QUICK_REPLIES
    }

    /// The resume asset offered for download.
    pub fn resume(&self) -> &AssetRef {
        &self.resume
    }

    /// The strategy chain answering this session.
    pub fn resolver(&self) -> &Resolver {
        &self.shared.resolver
    }

    /// Hands the resume asset to `downloader` and records the outcome in the transcript.
    pub async fn download_resume(&self, downloader: &dyn AssetDownloader) -> Result<PathBuf, FolioError> {
        let result = downloader.download(&self.resume).await;
        let note = match &result {
            Ok(path) => {
                info!(path = %path.display(), downloader = downloader.name(), "resume saved");
                knowledge::DOWNLOAD_CONFIRMED_REPLY
            }
            Err(e) => {
                warn!(error = %e, downloader = downloader.name(), "resume download failed");
                knowledge::DOWNLOAD_FAILED_REPLY
            }
        };
        self.shared
            .transcript
            .lock()
            .await
            .conversation
            .push(Message::assistant(note, None));
        result
    }
}
