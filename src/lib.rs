pub mod backend; // HTTP/JSON contracts with the conversation service
pub mod commands;
pub mod config;
pub mod viewer; // Read-only conversation history viewer
pub mod widget; // Live chat widget controller

use tracing_subscriber::EnvFilter;

use commands::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Talkbox starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::chat::send_message,
            commands::chat::get_transcript,
            commands::chat::new_conversation,
            commands::chat::open_feedback_form,
            commands::chat::select_thumb,
            commands::chat::submit_feedback,
            commands::talks::load_conversations,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Talkbox");
}
