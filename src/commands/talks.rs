//! Conversation viewer — Tauri IPC commands.

use tauri::State;

use crate::viewer::ConversationView;

use super::state::AppState;

/// Fetch the full conversation history and return the render blocks.
/// Every call replaces whatever the viewer held before.
#[tauri::command]
pub fn load_conversations(state: State<'_, AppState>) -> Result<Vec<ConversationView>, String> {
    let mut viewer = state
        .viewer
        .lock()
        .map_err(|_| "Failed to acquire viewer lock".to_string())?;

    viewer.load().map_err(|e| e.to_string())?;
    Ok(viewer.render())
}
