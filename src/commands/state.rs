use std::sync::Mutex;

use crate::backend::HttpBackend;
use crate::viewer::ConversationViewer;
use crate::widget::ChatWidget;

/// Global application state managed by Tauri.
///
/// The chat widget and the conversation viewer are independent controllers
/// with no shared state between them; each sits behind its own lock.
pub struct AppState {
    pub widget: Mutex<ChatWidget<HttpBackend>>,
    pub viewer: Mutex<ConversationViewer<HttpBackend>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            widget: Mutex::new(ChatWidget::new(HttpBackend::from_config())),
            viewer: Mutex::new(ConversationViewer::new(HttpBackend::from_config())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_empty() {
        let state = AppState::new();
        let widget = state.widget.lock().unwrap();
        assert!(widget.transcript().is_empty());
        assert!(!widget.feedback_trigger_visible());
    }

    #[test]
    fn viewer_renders_nothing_before_load() {
        let state = AppState::new();
        let viewer = state.viewer.lock().unwrap();
        assert!(viewer.render().is_empty());
    }
}
