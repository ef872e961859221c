//! # mz-chat
//!
//! Conversational model client for MZ.
//!
//! [`ChatBackend`] is the seam between the turn handler and the model: it
//! takes the whole transcript and returns one reply. [`AnthropicClient`] is
//! the production implementation over the Anthropic Messages API; tests
//! substitute a scripted backend.

mod anthropic;
mod error;
mod http;

pub use anthropic::AnthropicClient;
pub use error::ChatError;

use std::future::Future;

use mz_core::entities::Message;

/// Produces the assistant's next message for a transcript.
pub trait ChatBackend {
    /// Ask for a reply to `transcript` (oldest message first).
    fn reply(&self, transcript: &[Message]) -> impl Future<Output = Result<String, ChatError>>;
}
