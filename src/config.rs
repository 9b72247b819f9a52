/// Application-level constants
pub const APP_NAME: &str = "Talkbox";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum reply length requested from the backend on every `/chat` call.
/// Fixed configuration, not user-adjustable.
pub const MAX_REPLY_LENGTH: u32 = 500;

/// Sampling temperature sent with every `/chat` call.
pub const TEMPERATURE: f32 = 0.7;

/// Per-request timeout for all backend calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default conversation backend when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL.
pub const BACKEND_URL_ENV: &str = "TALKBOX_BACKEND_URL";

/// Resolve the backend base URL from the environment, falling back to the
/// local default.
pub fn backend_base_url() -> String {
    std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,talkbox_lib=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_talkbox() {
        assert_eq!(APP_NAME, "Talkbox");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn chat_constants_are_fixed() {
        assert_eq!(MAX_REPLY_LENGTH, 500);
        assert!((TEMPERATURE - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn default_backend_is_local() {
        assert_eq!(DEFAULT_BACKEND_URL, "http://localhost:8000");
    }

    #[test]
    fn default_log_filter_includes_crate() {
        assert!(default_log_filter().contains("talkbox"));
    }
}
