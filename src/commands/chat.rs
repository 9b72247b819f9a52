//! Chat widget — Tauri IPC commands.
//!
//! Commands:
//! - `send_message`: send user input, get the rendered reply back
//! - `get_transcript`: the visible message log
//! - `new_conversation`: clear transcript and session context
//! - `open_feedback_form`: consume the trigger, open a form for the last reply
//! - `select_thumb`: record the thumb choice on one form
//! - `submit_feedback`: submit and close one form

use tauri::State;
use uuid::Uuid;

use crate::widget::{SendOutcome, ThumbChoice, TranscriptEntry};

use super::state::AppState;

/// Frontend-friendly transcript entry (timestamps as strings).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TranscriptEntryView {
    pub role: String,
    pub content: String,
    pub timestamp: String,
}

impl From<&TranscriptEntry> for TranscriptEntryView {
    fn from(entry: &TranscriptEntry) -> Self {
        TranscriptEntryView {
            role: entry.role.as_str().to_string(),
            content: entry.content.clone(),
            timestamp: entry.timestamp.to_string(),
        }
    }
}

/// Send a user message. Returns the rendered reply text, or `None` when the
/// input was empty after trimming and nothing was sent.
#[tauri::command]
pub fn send_message(text: String, state: State<'_, AppState>) -> Result<Option<String>, String> {
    let mut widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    match widget.send_message(&text).map_err(|e| e.to_string())? {
        SendOutcome::Ignored => Ok(None),
        SendOutcome::Replied(reply) => Ok(Some(reply)),
    }
}

/// Get the visible message log, oldest first.
#[tauri::command]
pub fn get_transcript(state: State<'_, AppState>) -> Result<Vec<TranscriptEntryView>, String> {
    let widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    Ok(widget.transcript().iter().map(Into::into).collect())
}

/// Clear the transcript and session context; the next send starts a fresh
/// backend conversation.
#[tauri::command]
pub fn new_conversation(state: State<'_, AppState>) -> Result<(), String> {
    let mut widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    widget.new_conversation();
    Ok(())
}

/// Open a feedback form for the most recent assistant reply.
/// Returns the form id; the trigger is consumed.
#[tauri::command]
pub fn open_feedback_form(state: State<'_, AppState>) -> Result<String, String> {
    let mut widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    let form_id = widget.open_feedback_form().map_err(|e| e.to_string())?;
    Ok(form_id.to_string())
}

/// Record a thumb selection on an open form. `thumbs_up = true` selects the
/// up thumb, `false` the down thumb; the two are mutually exclusive.
#[tauri::command]
pub fn select_thumb(
    form_id: String,
    thumbs_up: bool,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let id = Uuid::parse_str(&form_id).map_err(|e| format!("Invalid form ID: {e}"))?;
    let choice = if thumbs_up {
        ThumbChoice::Up
    } else {
        ThumbChoice::Down
    };

    let mut widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    widget.select_thumb(id, choice).map_err(|e| e.to_string())
}

/// Submit an open form with its comment text. The form closes regardless of
/// the outcome; errors are returned to the frontend.
#[tauri::command]
pub fn submit_feedback(
    form_id: String,
    comment: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let id = Uuid::parse_str(&form_id).map_err(|e| format!("Invalid form ID: {e}"))?;

    let mut widget = state
        .widget
        .lock()
        .map_err(|_| "Failed to acquire widget lock".to_string())?;

    widget.submit_feedback(id, &comment).map_err(|e| e.to_string())
}
