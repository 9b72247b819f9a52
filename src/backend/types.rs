use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// `conversation_id` is serialized as `null` on the first message of a
/// conversation; the backend assigns an id and returns it in the response.
/// `max_length` and `temperature` are fixed configuration constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<String>,
    pub max_length: u32,
    pub temperature: f32,
}

/// Response body from `POST /chat`. Every field is optional from the
/// client's perspective; absent fields leave prior session state unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: Option<String>,
    pub conversation_id: Option<String>,
    pub message_id: Option<String>,
}

/// Request body for `PATCH /feedback`.
///
/// The thumbs fields are mutually exclusive and omitted entirely when no
/// selection was made; `feedback_text` is omitted when empty after trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs_up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs_down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_text: Option<String>,
}

/// One past conversation as returned by `GET /talks-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversation_id: String,
    /// Present in the backend response; not rendered by the viewer.
    #[serde(default)]
    pub started_at: Option<String>,
    pub messages: Vec<MessageRecord>,
}

/// One message within a past conversation, with any attached feedback.
///
/// `role` stays a plain string on the wire: the viewer renders whatever the
/// backend stored and must not fail on roles it does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub role: String,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub thumbs_up: Option<bool>,
    #[serde(default)]
    pub thumbs_down: Option<bool>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_null_conversation_id() {
        let request = ChatRequest {
            message: "Hello".into(),
            conversation_id: None,
            max_length: 500,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("conversation_id").unwrap().is_null());
        assert_eq!(json["max_length"], 500);
    }

    #[test]
    fn chat_response_tolerates_empty_body() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.reply.is_none());
        assert!(response.conversation_id.is_none());
        assert!(response.message_id.is_none());
    }

    #[test]
    fn feedback_payload_omits_unset_fields() {
        let payload = FeedbackPayload {
            message_id: "m1".into(),
            thumbs_up: None,
            thumbs_down: Some(true),
            feedback_text: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("thumbs_up"));
        assert!(!object.contains_key("feedback_text"));
        assert_eq!(json["thumbs_down"], true);
    }

    #[test]
    fn conversation_record_parses_backend_shape() {
        let body = r#"[{
            "conversation_id": "c1",
            "started_at": "2024-05-01T10:00:00",
            "messages": [{
                "role": "assistant",
                "content": "Hi there",
                "timestamp": "2024-05-01T10:00:05",
                "thumbs_up": true,
                "thumbs_down": null,
                "feedback_text": "nice"
            }]
        }]"#;
        let records: Vec<ConversationRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].conversation_id, "c1");
        assert_eq!(records[0].messages[0].thumbs_up, Some(true));
        assert_eq!(records[0].messages[0].thumbs_down, None);
        assert_eq!(records[0].messages[0].feedback_text.as_deref(), Some("nice"));
    }

    #[test]
    fn message_record_without_feedback_fields() {
        let body = r#"{"role": "user", "content": "Hello", "timestamp": "t"}"#;
        let record: MessageRecord = serde_json::from_str(body).unwrap();
        assert!(record.thumbs_up.is_none());
        assert!(record.thumbs_down.is_none());
        assert!(record.feedback_text.is_none());
    }
}
