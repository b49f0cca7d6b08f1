//! Append-only chat transcript.

use serde::{Deserialize, Serialize};

/// Greeting shown before the first exchange.
pub const GREETING: &str =
    "Ask anything. I will consult multiple models and reply with a consensus.";

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Ordered conversation. Entries are only ever appended.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A transcript seeded with the assistant greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::Assistant, content));
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// History sent with a chat request: every non-assistant entry, then the
    /// new user input.
    #[must_use]
    pub fn request_history(&self, new_input: &str) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.role != Role::Assistant)
            .cloned()
            .chain(std::iter::once(ChatMessage::new(Role::User, new_input)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().unwrap().role, Role::Assistant);
        assert_eq!(transcript.last().unwrap().content, GREETING);
    }

    #[test]
    fn test_request_history_skips_assistant() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_assistant("answer");

        let history = transcript.request_history("second");
        assert_eq!(
            history,
            vec![
                ChatMessage::new(Role::User, "first"),
                ChatMessage::new(Role::User, "second"),
            ]
        );
        // Building a request never touches the transcript.
        assert_eq!(transcript.len(), 3);
    }
}
