//! TOML rule loading for the scripted chat responder.
//!
//! Provides two loading methods:
//! - `default_rules()` - Loads embedded rules compiled into the binary
//! - `load_rules(path)` - Loads custom rules from a file path

use anyhow::Result;
use std::path::Path;

use super::types::RulesConfig;

/// Default rules embedded in the binary at compile time.
/// These are loaded from `config/reply_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/reply_rules.toml");

/// Load a rule table from a TOML file at the given path.
///
/// # Arguments
/// * `path` - Path to the TOML file containing rules
///
/// # Returns
/// * `Ok(RulesConfig)` - Parsed rule configuration
/// * `Err` - If file cannot be read or TOML is invalid
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RulesConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Get the default rule table embedded in the binary.
///
/// Covers the four scripted topics (demo, pricing, timeline, contact)
/// plus the generic fallback reply.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_rules() -> RulesConfig {
    toml::from_str(DEFAULT_RULES).expect("embedded reply_rules.toml must be valid TOML")
}
