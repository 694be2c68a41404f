// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned replies and the keyword knowledge base.

use folio_core::types::MessageAction;

/// Invitation used when nothing better is available.
pub const DEFAULT_REPLY: &str = "I'm here to help you learn about Haryiank's experience, skills, and projects. What would you like to know?";

/// Reply when the local call limiter refuses a remote call.
pub const LIMITER_DENIED_REPLY: &str = "Whoa there! 🛑 I'm getting too many questions too fast. Let me catch my breath for a minute, or try using the quick replies below! 😅";

/// Reply when the remote service itself reports a rate limit.
pub const REMOTE_RATE_LIMITED_REPLY: &str =
    "Oops! I'm getting a lot of questions right now 😅 Try the quick replies below!";

/// Appended to the transcript after the resume was saved.
pub const DOWNLOAD_CONFIRMED_REPLY: &str =
    "📄 Resume downloaded! Feel free to reach out if you have any questions.";

/// Appended to the transcript when saving the resume failed.
pub const DOWNLOAD_FAILED_REPLY: &str =
    "Sorry, I couldn't fetch the resume right now. Please try again in a moment.";

/// Suggested utterances offered under the transcript.
pub const QUICK_REPLIES: [&str; 4] = [
    "Tell me about your experience",
    "What are your skills?",
    "Show me your projects",
    "Download Resume",
];

/// A canned reply selected by keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Lower-case substrings that select this entry.
    pub keywords: Vec<String>,
    pub response: String,
    pub action: Option<MessageAction>,
}

impl KnowledgeEntry {
    /// True if any keyword occurs in the already lower-cased `utterance`.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered keyword entries; the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Builds a knowledge base, lower-casing every keyword.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut e| {
                e.keywords = e.keywords.iter().map(|k| k.to_lowercase()).collect();
                e
            })
            .collect();
        Self { entries }
    }

    /// The resume entry that offers a download.
    pub fn resume(owner_name: &str) -> Self {
        Self::new(vec![KnowledgeEntry {
            keywords: ["resume", "cv", "download", "curriculum vitae", "pdf"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            response: format!("You can download {owner_name}'s resume using the button below! 📄"),
            action: Some(MessageAction::OfferDownload),
        }])
    }

    /// Looks up the first entry matching `utterance`, case-insensitively.
    pub fn lookup(&self, utterance: &str) -> Option<&KnowledgeEntry> {
        let lowered = utterance.to_lowercase();
        self.entries.iter().find(|e| e.matches(&lowered))
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }
}

/// The default invitation, naming `owner_name`.
pub fn default_reply(owner_name: &str) -> String {
    DEFAULT_REPLY.replace("Haryiank", owner_name)
}
