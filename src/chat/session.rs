//! Chat session manager: ordered message log plus the simulated
//! "typing" delay before each assistant reply.
//!
//! The session is driven from UI event handlers and expects to live inside
//! a (current-thread) tokio runtime: each accepted submission spawns one
//! fire-once timer task that appends the assistant's reply when the delay
//! elapses. The log is append-only and never reordered.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

use crate::responder::Responder;
use crate::shell::Navigator;

use super::types::ChatMessage;

/// Delay before the assistant's reply appears, simulating "thinking".
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Greeting shown when a session starts.
const GREETING: &str = "Hey! Ask me about pricing, timeline, or try \"demo\" to see my work!";

/// Conversation state for one page load.
///
/// A submission during a pending reply is not rejected: it starts another
/// delay cycle of its own, and replies append in scheduling order. The
/// typing indicator therefore counts pending replies rather than holding
/// a flag, so overlapping cycles cannot clear it early.
pub struct ChatSession {
    responder: Arc<Responder>,
    navigator: Arc<dyn Navigator>,
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    pending_replies: Arc<AtomicUsize>,
}

impl ChatSession {
    /// Create a session opening with the fixed greeting message.
    pub fn new(responder: Arc<Responder>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            responder,
            navigator,
            messages: Arc::new(Mutex::new(vec![ChatMessage::assistant(GREETING)])),
            pending_replies: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Submit user input.
    ///
    /// Blank/whitespace-only input is a no-op and returns `false`. Otherwise
    /// the trimmed text is appended as a user message, and a reply task is
    /// scheduled to append the assistant's answer after [`REPLY_DELAY`].
    /// Returns `true` when the submission was accepted.
    pub fn submit(&self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }

        let user_text = trimmed.to_string();
        self.messages
            .lock()
            .unwrap()
            .push(ChatMessage::user(user_text.clone()));
        self.pending_replies.fetch_add(1, Ordering::SeqCst);

        let responder = self.responder.clone();
        let navigator = self.navigator.clone();
        let messages = self.messages.clone();
        let pending = self.pending_replies.clone();

        tokio::spawn(async move {
            tokio::time::sleep(REPLY_DELAY).await;
            if let Some(reply) = responder.respond(&user_text) {
                if let Some(view) = reply.navigate_to {
                    info!("chat reply navigates to {:?}", view);
                    navigator.navigate(view);
                }
                messages.lock().unwrap().push(ChatMessage::assistant(reply.text));
            }
            pending.fetch_sub(1, Ordering::SeqCst);
        });

        true
    }

    /// True while at least one reply is still pending.
    pub fn is_typing(&self) -> bool {
        self.pending_replies.load(Ordering::SeqCst) > 0
    }

    /// Snapshot of the message log, in conversation order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().unwrap().clone()
    }
}
