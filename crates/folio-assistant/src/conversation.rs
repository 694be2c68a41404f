// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory, append-only conversation transcript.

use folio_core::types::Message;

/// Ordered transcript of one session.
///
/// There is no way to edit or remove a message once pushed.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transcript that opens with `greeting`.
    pub fn with_greeting(greeting: Message) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    /// Appends a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages recorded.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True before anything has been pushed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::Role;

    #[test]
    fn keeps_insertion_order() {
        let mut conv = Conversation::new();
        conv.push(Message::user("first"));
        conv.push(Message::assistant("second", None));
        conv.push(Message::user("third"));

        let texts: Vec<&str> = conv.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(conv.last().unwrap().role, Role::User);
    }

    #[test]
    fn greeting_is_first_message() {
        let conv = Conversation::with_greeting(Message::assistant("hello", None));
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].role, Role::Assistant);
        assert!(!conv.is_empty());
    }
}
