//! Conversation transcript
//!
//! In-memory message log for one chat session. Starts with the welcome
//! message, supports clear/regenerate/copy-last, and renders to plain text
//! for export. Nothing is persisted unless the caller writes the export.

use crate::action_results::ActionOutcome;
use crate::actions::{build_buttons, ActionButton, WELCOME_ACTIONS};
use crate::intent::IntentCategory;
use crate::reply::Reply;
use crate::suggestions::WELCOME_SUGGESTIONS;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const WELCOME_MESSAGE: &str = "Good day. I'm Vemo, your AI Network Engineer. I'm currently monitoring your infrastructure with the following metrics: 247 devices online, 98.7% network health score, and 12ms average latency. My core capabilities include network optimization, traffic analysis, security monitoring, and predictive maintenance. How may I assist you with your network infrastructure today?";

const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Vemo,
    System,
}

impl MessageKind {
    /// Upper-case label used in exports
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::User => "USER",
            MessageKind::Vemo => "VEMO",
            MessageKind::System => "SYSTEM",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IntentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionButton>,
    #[serde(default)]
    pub metadata: MessageMetadata,
}

impl Message {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            timestamp: Local::now(),
            actions: Vec::new(),
            metadata: MessageMetadata::default(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn welcome() -> Self {
        Self {
            actions: build_buttons(WELCOME_ACTIONS),
            metadata: MessageMetadata {
                suggestions: WELCOME_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
                ..MessageMetadata::default()
            },
            ..Self::new(MessageKind::Vemo, WELCOME_MESSAGE)
        }
    }

    pub fn from_reply(reply: &Reply) -> Self {
        Self {
            timestamp: reply.timestamp,
            actions: reply.actions.clone(),
            metadata: MessageMetadata {
                category: Some(reply.category),
                confidence: Some(reply.confidence),
                processing_time_ms: Some(reply.processing_time.as_millis() as u64),
                suggestions: reply.suggestions.clone(),
            },
            ..Self::new(MessageKind::Vemo, reply.text.clone())
        }
    }

    pub fn from_outcome(outcome: &ActionOutcome) -> Self {
        Self {
            actions: outcome.follow_ups.clone(),
            metadata: MessageMetadata {
                category: None,
                confidence: Some(outcome.confidence),
                processing_time_ms: Some(outcome.processing_time.as_millis() as u64),
                suggestions: outcome.suggestions.clone(),
            },
            ..Self::new(MessageKind::System, outcome.text.clone())
        }
    }

    /// `[timestamp] KIND: content`
    pub fn export_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format(EXPORT_TIMESTAMP_FORMAT),
            self.kind.label(),
            self.content
        )
    }
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A fresh transcript holding only the welcome message
    pub fn new() -> Self {
        Self {
            messages: vec![Message::welcome()],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Most recent message the user typed or clicked
    pub fn last_user(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.kind == MessageKind::User)
    }

    /// Most recent assistant reply (action results excluded)
    pub fn last_vemo(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.kind == MessageKind::Vemo)
    }

    /// Drop the final message if it is an assistant reply
    pub fn pop_last_vemo(&mut self) -> Option<Message> {
        if self.messages.len() > 1 && self.last().map(|m| m.kind) == Some(MessageKind::Vemo) {
            self.messages.pop()
        } else {
            None
        }
    }

    /// Back to the welcome message
    pub fn reset(&mut self) {
        self.messages = vec![Message::welcome()];
    }

    /// Plain-text export, messages separated by blank lines
    pub fn export_text(&self) -> String {
        self.messages
            .iter()
            .map(Message::export_line)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// `vemo-conversation-YYYY-MM-DD.txt`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("vemo-conversation-{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_results::ActionOutcome;

    #[test]
    fn test_starts_with_welcome() {
        let t = Transcript::new();
        assert_eq!(t.len(), 1);
        let welcome = &t.messages()[0];
        assert_eq!(welcome.kind, MessageKind::Vemo);
        assert_eq!(welcome.content, WELCOME_MESSAGE);
        assert_eq!(welcome.actions.len(), 6);
        assert_eq!(welcome.actions[1].action_id, "optimize");
        assert_eq!(welcome.metadata.suggestions.len(), 4);
    }

    #[test]
    fn test_export_format() {
        let mut t = Transcript::new();
        t.push(Message::user("hello"));
        let text = t.export_text();

        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with('['));
        assert!(blocks[0].contains("] VEMO: Good day."));
        assert!(blocks[1].ends_with("] USER: hello"));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "vemo-conversation-2024-03-07.txt");
    }

    #[test]
    fn test_pop_last_vemo_keeps_welcome() {
        let mut t = Transcript::new();
        assert!(t.pop_last_vemo().is_none());
        t.push(Message::user("hi"));
        assert!(t.pop_last_vemo().is_none());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_last_vemo_skips_system_messages() {
        let mut t = Transcript::new();
        t.push(Message::user("🔧 Network Status"));
        t.push(Message::from_outcome(&ActionOutcome::for_action("status")));
        assert_eq!(t.last().unwrap().kind, MessageKind::System);
        assert_eq!(t.last_vemo().unwrap().content, WELCOME_MESSAGE);
        assert_eq!(t.last_user().unwrap().content, "🔧 Network Status");
    }

    #[test]
    fn test_reset() {
        let mut t = Transcript::new();
        t.push(Message::user("a"));
        t.push(Message::user("b"));
        t.reset();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("x");
        let b = Message::user("x");
        assert_ne!(a.id, b.id);
    }
}
