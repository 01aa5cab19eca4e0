//! Keyword matching engine for the scripted chat assistant.
//!
//! The `Responder` maps free-text user input to a canned reply by testing
//! an ordered list of keyword triggers, first match wins. There is no
//! context across turns; the reply is purely a function of the input.

use super::types::{Reply, RulesConfig};

/// The keyword matching engine.
///
/// Evaluates the loaded rule table against user input to produce a reply
/// and, for rules that carry one, a navigation effect for the shell.
pub struct Responder {
    rules: RulesConfig,
}

impl Responder {
    /// Create a new responder with the given rule table.
    ///
    /// # Arguments
    /// * `rules` - Rule configuration (typically from `default_rules()` or `load_rules()`)
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    /// Compute the reply for one user input.
    ///
    /// The input is trimmed and lowercased before matching. Rules are tested
    /// in table order and the first keyword found as a substring wins; when
    /// nothing matches, the fallback reply is returned. Blank input yields
    /// `None` - the caller must not append any message for it.
    pub fn respond(&self, input: &str) -> Option<Reply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        for rule in &self.rules.rules {
            if lowered.contains(rule.keyword.as_str()) {
                return Some(Reply {
                    text: rule.reply.clone(),
                    navigate_to: rule.navigate_to,
                });
            }
        }

        Some(Reply {
            text: self.rules.fallback.clone(),
            navigate_to: None,
        })
    }

    /// List all keywords the responder reacts to, in evaluation order.
    pub fn known_keywords(&self) -> Vec<&str> {
        self.rules.rules.iter().map(|r| r.keyword.as_str()).collect()
    }
}
