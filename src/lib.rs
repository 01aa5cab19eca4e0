//! Interactive demo engine for a single-page portfolio site.
//!
//! Everything a UI shell needs to drive the site's widgets lives here:
//! the scripted chat assistant, the self-contained demo widgets (ROI
//! calculator, live search, email validator, cart, color palette,
//! analytics, booking), the transient notification channel, and the mail
//! composition seam. Rendering, routing, and actually opening a mail
//! draft are the shell's job, behind the [`shell::Navigator`] and
//! [`mailer::MailComposer`] traits.
//!
//! The engine expects to run inside a (current-thread) tokio runtime:
//! the chat reply delay and the notification auto-clear are fire-once
//! timer tasks; everything else is synchronous.

pub mod app;
pub mod chat;
pub mod demos;
mod error;
pub mod mailer;
pub mod notifier;
pub mod responder;
pub mod shell;

pub use app::DemoApp;
pub use error::DemodeckError;

/// Install the global tracing subscriber, honoring `RUST_LOG` and
/// defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
