//! Type definitions for the scripted chat responder.
//!
//! These types support both TOML deserialization (for loading the rule
//! table) and JSON serialization (for shell communication).

use serde::{Deserialize, Serialize};

/// A page the shell can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Main landing page
    Home,
    /// Interactive demos page
    Demos,
}

/// Root configuration loaded from reply_rules.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Reply used when no keyword matches
    pub fallback: String,
    /// Keyword rules, evaluated in file order (first match wins)
    pub rules: Vec<ReplyRule>,
}

/// A keyword trigger mapped to a canned reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRule {
    /// Lowercase substring searched for in the user's input
    pub keyword: String,
    /// Canned reply text
    pub reply: String,
    /// Optional view switch dispatched alongside the reply
    #[serde(default)]
    pub navigate_to: Option<ViewId>,
}

/// A computed response: reply text plus an optional navigation effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub text: String,
    pub navigate_to: Option<ViewId>,
}
