//! Chat assistant: append-only message log plus the delayed-reply cycle.

mod session;
mod types;

pub use session::{ChatSession, REPLY_DELAY};
pub use types::{ChatMessage, MessageOrigin};
