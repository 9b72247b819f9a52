//! Read-only viewer for past conversations.
//!
//! Fetches the full history from `GET /talks-data` and turns it into typed
//! render blocks for the frontend. Every load is a full replace — there is
//! no pagination, incremental loading, or update-in-place. No interactivity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::{BackendError, ChatBackend, ConversationRecord, MessageRecord};

const THUMBS_UP_MARKER: &str = "👍";
const THUMBS_DOWN_MARKER: &str = "👎";

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Backend request failed: {0}")]
    Backend(#[from] BackendError),
}

/// Render model for one conversation: a heading plus its message blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationView {
    pub heading: String,
    pub messages: Vec<MessageBlock>,
}

/// Render model for one message, with its optional feedback annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBlock {
    pub role: String,
    pub content: String,
    pub timestamp: String,
    pub feedback: Option<String>,
}

/// Controller for the conversation history page.
pub struct ConversationViewer<B> {
    backend: B,
    conversations: Vec<ConversationRecord>,
}

impl<B: ChatBackend> ConversationViewer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            conversations: Vec::new(),
        }
    }

    /// Fetch the full conversation list, replacing everything held before.
    pub fn load(&mut self) -> Result<(), ViewerError> {
        let conversations = self.backend.fetch_conversations()?;
        tracing::debug!(count = conversations.len(), "Loaded conversation history");
        self.conversations = conversations;
        Ok(())
    }

    /// Render all loaded conversations in input order.
    pub fn render(&self) -> Vec<ConversationView> {
        self.conversations
            .iter()
            .map(|conversation| ConversationView {
                heading: format!("Conversation ID: {}", conversation.conversation_id),
                messages: conversation
                    .messages
                    .iter()
                    .map(|message| MessageBlock {
                        role: message.role.clone(),
                        content: message.content.clone(),
                        timestamp: message.timestamp.clone(),
                        feedback: feedback_annotation(message),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Build the feedback annotation line for one message, or `None` when the
/// message carries no feedback at all.
///
/// Fixed order: thumbs-up marker, thumbs-down marker, quoted comment — each
/// included only when present.
fn feedback_annotation(message: &MessageRecord) -> Option<String> {
    let up = message.thumbs_up.unwrap_or(false);
    let down = message.thumbs_down.unwrap_or(false);
    let text = message
        .feedback_text
        .as_deref()
        .filter(|t| !t.is_empty());

    if !up && !down && text.is_none() {
        return None;
    }

    let mut annotation = String::from("Feedback: ");
    if up {
        annotation.push_str(THUMBS_UP_MARKER);
        annotation.push(' ');
    }
    if down {
        annotation.push_str(THUMBS_DOWN_MARKER);
        annotation.push(' ');
    }
    if let Some(text) = text {
        annotation.push('"');
        annotation.push_str(text);
        annotation.push('"');
    }
    Some(annotation.trim_end().to_string())
}
