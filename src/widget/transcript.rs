use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One line of the visible chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// The visible message log, append-only, page lifetime.
///
/// Entries are plain text; rendering happens downstream from typed data,
/// never by interpolating content into markup.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: MessageRole, content: &str) {
        self.entries.push(TranscriptEntry {
            role,
            content: content.to_string(),
            timestamp: Local::now().naive_local(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(MessageRole::User, "Hello");
        transcript.push(MessageRole::Assistant, "Hi there");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].role, MessageRole::User);
        assert_eq!(transcript.entries()[0].content, "Hello");
        assert_eq!(transcript.entries()[1].role, MessageRole::Assistant);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push(MessageRole::User, "Hello");
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_value(MessageRole::Assistant).unwrap();
        assert_eq!(json, "assistant");
        assert_eq!(MessageRole::User.as_str(), "user");
    }
}
