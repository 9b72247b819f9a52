use crate::backend::ChatResponse;

/// Conversation context for the live chat session.
///
/// The backend assigns the conversation id on the first reply; until then it
/// is `None` and `/chat` requests carry `null`. Only the id of the most
/// recent assistant message is tracked — prior message ids are not retained.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    conversation_id: Option<String>,
    last_assistant_message_id: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation_id(&self) -> Option<&String> {
        self.conversation_id.as_ref()
    }

    pub fn last_assistant_message_id(&self) -> Option<&String> {
        self.last_assistant_message_id.as_ref()
    }

    /// Take over whatever identifiers the `/chat` response carries.
    /// Absent fields leave the prior values unchanged.
    pub fn absorb(&mut self, response: &ChatResponse) {
        if let Some(id) = &response.conversation_id {
            self.conversation_id = Some(id.clone());
        }
        if let Some(id) = &response.message_id {
            self.last_assistant_message_id = Some(id.clone());
        }
    }

    /// Start over: the next `/chat` request will ask the backend for a new
    /// conversation.
    pub fn reset(&mut self) {
        self.conversation_id = None;
        self.last_assistant_message_id = None;
    }
}
