//! Live chat widget — transcript, session context, and feedback flow.
//!
//! The widget owns everything that existed for the lifetime of the chat
//! page: the visible message log, the current conversation context, the
//! feedback-trigger visibility, and any open feedback forms. All state is
//! explicit and per-instance; nothing is process-global.

pub mod controller;
pub mod feedback;
pub mod session;
pub mod transcript;

pub use controller::{ChatWidget, SendOutcome};
pub use feedback::{FeedbackForm, ThumbChoice};
pub use session::SessionContext;
pub use transcript::{MessageRole, Transcript, TranscriptEntry};

use thiserror::Error;
use uuid::Uuid;

use crate::backend::BackendError;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Backend request failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Feedback trigger is not visible")]
    TriggerHidden,

    #[error("No assistant message available to rate")]
    NoMessageToRate,

    #[error("Unknown feedback form: {0}")]
    FormNotFound(Uuid),
}
