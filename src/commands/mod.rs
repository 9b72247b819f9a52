pub mod chat;
pub mod state;
pub mod talks;

/// Health check IPC command — verifies the Rust core is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
