use tourla_persist::{ChatMessage, SenderKind};

use crate::intent::Topic;

/// Dialogue state carried between turns.
///
/// The only memory is a pending clarification: when the bot asked for a
/// locality it records the topic in the message metadata (`awaiting`), and
/// the next turn reads it back from the most recent bot message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationContext {
    pub awaiting: Option<Topic>,
}

impl ConversationContext {
    pub fn awaiting(topic: Topic) -> Self {
        Self {
            awaiting: Some(topic),
        }
    }

    /// Build the context from a session's messages in insertion order
    pub fn from_history(history: &[ChatMessage]) -> Self {
        let awaiting = history
            .iter()
            .rev()
            .find(|m| m.sender == SenderKind::Bot)
            .and_then(|m| m.metadata.awaiting.as_deref())
            .and_then(|key| key.parse().ok());
        Self { awaiting }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tourla_persist::MessageMetadata;

    fn message(sender: SenderKind, awaiting: Option<&str>) -> ChatMessage {
        ChatMessage {
            id: "m".into(),
            session_id: "s".into(),
            user_id: "u".into(),
            sender,
            content: String::new(),
            metadata: MessageMetadata {
                awaiting: awaiting.map(str::to_string),
                ..Default::default()
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(ConversationContext::from_history(&[]), ConversationContext::default());
    }

    #[test]
    fn test_reads_latest_bot_message() {
        let history = [
            message(SenderKind::Bot, Some("turismo")),
            message(SenderKind::User, None),
        ];
        assert_eq!(
            ConversationContext::from_history(&history).awaiting,
            Some(Topic::Tourism)
        );
    }

    #[test]
    fn test_answered_clarification_is_not_reused() {
        let history = [
            message(SenderKind::Bot, Some("restaurantes")),
            message(SenderKind::User, None),
            message(SenderKind::Bot, None),
        ];
        assert_eq!(ConversationContext::from_history(&history).awaiting, None);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let history = [message(SenderKind::Bot, Some("saludo"))];
        assert_eq!(ConversationContext::from_history(&history).awaiting, None);
    }
}
