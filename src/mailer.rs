//! Mail draft composition for the "open a pre-filled email" collaborator.
//!
//! The engine only builds the draft and its `mailto:` URL; actually opening
//! the draft is the shell's job, behind the [`MailComposer`] trait.

use serde::Serialize;

/// Fixed recipient for all site mail.
pub const RECIPIENT: &str = "hello@brightpixel.dev";

/// A composed outgoing message, ready for the shell to open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Render the draft as a `mailto:` URL with percent-encoded query
    /// parameters, addressed to [`RECIPIENT`].
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            RECIPIENT,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Shell collaborator that opens a pre-filled outgoing message.
pub trait MailComposer: Send + Sync {
    fn compose(&self, draft: &MailDraft);
}

/// Composer that drops drafts on the floor (headless default).
pub struct NoopMailComposer;

impl MailComposer for NoopMailComposer {
    fn compose(&self, _draft: &MailDraft) {}
}
