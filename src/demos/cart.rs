//! Append-only shopping cart demo.

use serde::Serialize;

/// An ordered list of cart line labels (`"<name> - $<price>"`).
///
/// Strictly append-only: no removal, no dedup, no quantity aggregation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the cart. Duplicates are kept.
    pub fn add(&mut self, label: impl Into<String>) {
        self.items.push(label.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
