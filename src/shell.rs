//! Collaborator seams implemented by the UI shell.

use crate::responder::ViewId;

/// Shell collaborator that switches the visible page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, view: ViewId);
}

/// Navigator that ignores view switches (headless default).
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _view: ViewId) {}
}
