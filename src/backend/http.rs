use std::collections::VecDeque;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use super::types::{ChatRequest, ChatResponse, ConversationRecord, FeedbackPayload};
use super::{BackendError, ChatBackend};
use crate::config;

/// HTTP client for the conversation backend.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpBackend {
    /// Create a new client pointing at the given backend.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client configured from the environment (`TALKBOX_BACKEND_URL`) with
    /// the default request timeout.
    pub fn from_config() -> Self {
        Self::new(&config::backend_base_url(), config::REQUEST_TIMEOUT_SECS)
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            BackendError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            BackendError::Transport(e.to_string())
        }
    }

    fn parse_response<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))
    }
}

impl ChatBackend for HttpBackend {
    fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        let url = format!("{}/chat", self.base_url);
        tracing::debug!(url = %url, conversation_id = ?request.conversation_id, "Sending chat message");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        Self::parse_response(response)
    }

    fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}/feedback", self.base_url);
        tracing::debug!(url = %url, message_id = %payload.message_id, "Submitting feedback");

        let response = self
            .client
            .patch(&url)
            .json(payload)
            .send()
            .map_err(|e| self.transport_error(e))?;

        Self::parse_response(response)
    }

    fn fetch_conversations(&self) -> Result<Vec<ConversationRecord>, BackendError> {
        let url = format!("{}/talks-data", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.transport_error(e))?;

        Self::parse_response(response)
    }
}

/// Mock backend for testing — records every request and returns scripted
/// responses.
///
/// Chat responses are served from a queue; an empty queue yields an empty
/// envelope (all fields absent). Recorded requests are exposed for
/// assertions on the exact payloads the controllers built.
#[derive(Default)]
pub struct MockChatBackend {
    chat_queue: Mutex<VecDeque<Result<ChatResponse, BackendError>>>,
    feedback_queue: Mutex<VecDeque<Result<serde_json::Value, BackendError>>>,
    conversations: Mutex<Vec<ConversationRecord>>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    feedback_payloads: Mutex<Vec<FeedbackPayload>>,
}

impl MockChatBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next `/chat` response.
    pub fn queue_chat_response(&self, response: ChatResponse) {
        self.chat_queue
            .lock()
            .unwrap()
            .push_back(Ok(response));
    }

    /// Queue a failure for the next `/chat` call.
    pub fn queue_chat_error(&self, error: BackendError) {
        self.chat_queue.lock().unwrap().push_back(Err(error));
    }

    /// Queue a failure for the next `/feedback` call.
    pub fn queue_feedback_error(&self, error: BackendError) {
        self.feedback_queue.lock().unwrap().push_back(Err(error));
    }

    /// Set the conversations served by `fetch_conversations`.
    pub fn set_conversations(&self, conversations: Vec<ConversationRecord>) {
        *self.conversations.lock().unwrap() = conversations;
    }

    /// All `/chat` request bodies seen so far, in order.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    /// All `/feedback` payloads seen so far, in order.
    pub fn feedback_payloads(&self) -> Vec<FeedbackPayload> {
        self.feedback_payloads.lock().unwrap().clone()
    }
}

impl ChatBackend for MockChatBackend {
    fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        self.chat_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ChatResponse::default()))
    }

    fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> Result<serde_json::Value, BackendError> {
        self.feedback_payloads.lock().unwrap().push(payload.clone());
        self.feedback_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({ "success": true })))
    }

    fn fetch_conversations(&self) -> Result<Vec<ConversationRecord>, BackendError> {
        Ok(self.conversations.lock().unwrap().clone())
    }
}
