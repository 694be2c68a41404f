// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered strategy chain that turns an utterance into exactly one reply.

use tracing::debug;

use crate::strategy::{DefaultReply, Reply, ResponseStrategy};

/// Tries each strategy in order; the default reply closes the chain.
pub struct Resolver {
    strategies: Vec<Box<dyn ResponseStrategy>>,
    fallback: DefaultReply,
}

impl Resolver {
    /// Creates an empty chain that always ends in `fallback`.
    pub fn new(fallback: DefaultReply) -> Self {
        Self {
            strategies: Vec::new(),
            fallback,
        }
    }

    /// Appends a strategy after the ones already registered.
    pub fn with_strategy(mut self, strategy: Box<dyn ResponseStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Names of the registered strategies, in order, followed by the default.
    pub fn chain(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.strategies.iter().map(|s| s.name()).collect();
        names.push(self.fallback.name());
        names
    }

    /// Resolves `utterance`. Never fails.
    pub async fn resolve(&self, utterance: &str) -> Reply {
        for strategy in &self.strategies {
            if let Some(reply) = strategy.attempt(utterance).await {
                debug!(strategy = strategy.name(), source = ?reply.source, "utterance resolved");
                return reply;
            }
        }
        debug!("no strategy answered, using default reply");
        self.fallback.reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{self, KnowledgeBase};
    use crate::strategy::{ReplySource, StaticMatch};

    #[tokio::test]
    async fn empty_chain_yields_default() {
        let resolver = Resolver::new(DefaultReply::default());
        let reply = resolver.resolve("what's up").await;
        assert_eq!(reply.text, knowledge::DEFAULT_REPLY);
        assert_eq!(reply.source, ReplySource::Fallback);
    }

    #[tokio::test]
    async fn first_answering_strategy_wins() {
        let resolver = Resolver::new(DefaultReply::new("fallback"))
            .with_strategy(Box::new(StaticMatch::new(KnowledgeBase::resume("Ada"))));

        assert_eq!(resolver.resolve("send me your CV").await.source, ReplySource::Static);
        assert_eq!(resolver.resolve("hello").await.text, "fallback");
        assert_eq!(resolver.chain(), vec!["static", "default"]);
    }
}
