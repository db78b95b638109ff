mod auth;

pub use auth::{is_read_only_method, require_api_key, timing_safe_eq, API_KEY_HEADER};
