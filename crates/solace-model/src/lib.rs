//! Gemini-backed language model for the companion

mod codec;
mod gemini;
mod retry;

pub use codec::{build_request_body, extract_reply};
pub use gemini::GeminiClient;
pub use retry::RetryPolicy;
