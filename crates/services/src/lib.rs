#![forbid(unsafe_code)]

pub mod api;
pub mod chat_session;
pub mod error;
mod generation;
pub mod test_session;

pub use api::{AinstienApi, ApiClient, ApiConfig, ConfigError, DEFAULT_BASE_URL};
pub use chat_session::{CHAT_FALLBACK_TEXT, CHAT_OFFLINE_TEXT, ChatError, ChatSession};
pub use error::ApiError;
pub use generation::FetchTag;
pub use test_session::{TestError, TestPhase, TestSession};
