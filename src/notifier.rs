//! Transient notification channel with auto-dismiss.
//!
//! At most one notification is visible at a time. Each `show` starts a
//! fixed-duration clear timer; a newer `show` supersedes the pending timer
//! via a generation counter, so a stale timer never erases a newer message.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

/// How long a notification stays visible before auto-clearing.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Single-slot notification channel.
///
/// Cloning is cheap and shares the slot; the channel expects to live inside
/// a tokio runtime, where each `show` spawns one fire-once clear task.
#[derive(Clone)]
pub struct Notifier {
    current: Arc<Mutex<Option<String>>>,
    generation: Arc<AtomicU64>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    /// Create a channel with a custom time-to-live.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Show a message, replacing any pending one and restarting the expiry.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        info!("notification: {}", message);

        let generation = self.generation.clone();
        let token = generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.lock().unwrap() = Some(message);

        let current = self.current.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // A newer show() superseded this timer; leave its message alone.
            if generation.load(Ordering::SeqCst) == token {
                *current.lock().unwrap() = None;
            }
        });
    }

    /// The currently visible message, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
