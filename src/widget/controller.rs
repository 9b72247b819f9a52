use uuid::Uuid;

use super::feedback::{FeedbackForms, ThumbChoice};
use super::session::SessionContext;
use super::transcript::{MessageRole, Transcript, TranscriptEntry};
use super::WidgetError;
use crate::backend::{ChatBackend, ChatRequest};
use crate::config;

/// Rendered in place of the assistant reply when the backend omits one.
const NO_REPLY_PLACEHOLDER: &str = "(No reply)";

/// Outcome of a send action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was empty after trimming; nothing was logged or sent.
    Ignored,
    /// The backend answered; the rendered reply text is attached.
    Replied(String),
}

/// Controller for the live chat widget.
///
/// Owns the transcript, the session context, the feedback-trigger state and
/// all open feedback forms. One instance per chat surface.
pub struct ChatWidget<B> {
    backend: B,
    session: SessionContext,
    transcript: Transcript,
    feedback_trigger_visible: bool,
    forms: FeedbackForms,
}

impl<B: ChatBackend> ChatWidget<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: SessionContext::new(),
            transcript: Transcript::new(),
            feedback_trigger_visible: false,
            forms: FeedbackForms::new(),
        }
    }

    /// Send a user message to the backend.
    ///
    /// Empty or whitespace-only input is ignored: no transcript entry, no
    /// request. Otherwise the user entry is appended optimistically before
    /// the request goes out, and stays even if the request fails. On success
    /// the assistant reply (or a placeholder when the backend sent none) is
    /// appended and the feedback trigger is revealed.
    pub fn send_message(&mut self, text: &str) -> Result<SendOutcome, WidgetError> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        self.transcript.push(MessageRole::User, message);

        let request = ChatRequest {
            message: message.to_string(),
            conversation_id: self.session.conversation_id().cloned(),
            max_length: config::MAX_REPLY_LENGTH,
            temperature: config::TEMPERATURE,
        };
        let response = self.backend.send_chat(&request)?;

        self.session.absorb(&response);
        let reply = response
            .reply
            .unwrap_or_else(|| NO_REPLY_PLACEHOLDER.to_string());
        self.transcript.push(MessageRole::Assistant, &reply);
        self.feedback_trigger_visible = true;

        Ok(SendOutcome::Replied(reply))
    }

    /// Open a feedback form for the most recent assistant reply.
    ///
    /// Consumes the trigger: it stays hidden until the next reply arrives.
    /// The form is scoped to the assistant message id recorded at this
    /// moment; later replies do not retarget it.
    pub fn open_feedback_form(&mut self) -> Result<Uuid, WidgetError> {
        if !self.feedback_trigger_visible {
            return Err(WidgetError::TriggerHidden);
        }
        let message_id = self
            .session
            .last_assistant_message_id()
            .cloned()
            .ok_or(WidgetError::NoMessageToRate)?;

        self.feedback_trigger_visible = false;
        Ok(self.forms.open(message_id))
    }

    /// Record the thumb selection on one open form.
    pub fn select_thumb(&mut self, form_id: Uuid, choice: ThumbChoice) -> Result<(), WidgetError> {
        self.forms
            .get_mut(form_id)
            .ok_or(WidgetError::FormNotFound(form_id))?
            .select_thumb(choice);
        Ok(())
    }

    /// Submit one open form.
    ///
    /// The form is removed from the page before the request is issued, so it
    /// disappears regardless of the outcome; the backend result is returned
    /// to the caller instead of being dropped. The acknowledgement body is
    /// only logged.
    pub fn submit_feedback(&mut self, form_id: Uuid, comment: &str) -> Result<(), WidgetError> {
        let form = self
            .forms
            .take(form_id)
            .ok_or(WidgetError::FormNotFound(form_id))?;

        let payload = form.into_payload(comment);
        let ack = self.backend.submit_feedback(&payload)?;
        tracing::debug!(message_id = %payload.message_id, ack = %ack, "Feedback acknowledged");
        Ok(())
    }

    /// Start a fresh conversation: clears the transcript, the session
    /// context, the trigger, and any open forms.
    pub fn new_conversation(&mut self) {
        self.transcript.clear();
        self.session.reset();
        self.feedback_trigger_visible = false;
        self.forms.clear();
        tracing::info!("Started new conversation");
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.transcript.entries()
    }

    pub fn feedback_trigger_visible(&self) -> bool {
        self.feedback_trigger_visible
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn open_form_count(&self) -> usize {
        self.forms.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
