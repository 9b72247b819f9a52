//! Client side of the conversation backend contracts.
//!
//! The backend is an external collaborator reached over HTTP/JSON. Three
//! endpoints are consumed:
//! - `POST /chat` — send a user message, receive the assistant reply
//! - `PATCH /feedback` — attach thumbs/comment feedback to one message
//! - `GET /talks-data` — fetch the full conversation history
//!
//! `ChatBackend` is the seam between the UI controllers and the wire;
//! `HttpBackend` is the real implementation, `MockChatBackend` the
//! test double.

pub mod http;
pub mod types;

pub use http::{HttpBackend, MockChatBackend};
pub use types::{ChatRequest, ChatResponse, ConversationRecord, FeedbackPayload, MessageRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Backend returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

/// Operations the UI controllers need from the conversation backend.
///
/// Implementations are synchronous; suspension happens only at these
/// request boundaries, matching the sequential request/response flow of
/// the widget.
pub trait ChatBackend {
    /// `POST /chat` — returns the assistant reply envelope. All response
    /// fields are optional from the client's perspective.
    fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;

    /// `PATCH /feedback` — attach feedback to one message. The response
    /// body is unconstrained; callers only log it.
    fn submit_feedback(&self, payload: &FeedbackPayload)
        -> Result<serde_json::Value, BackendError>;

    /// `GET /talks-data` — full ordered conversation history.
    fn fetch_conversations(&self) -> Result<Vec<ConversationRecord>, BackendError>;
}
