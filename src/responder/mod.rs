//! Rule-based responder for the scripted chat assistant.
//!
//! This module provides a TOML-driven keyword table that maps free-text
//! user input to canned replies, with first-match-wins evaluation order.
//!
//! # Architecture
//!
//! - **Rules**: Loaded from TOML config at startup (or embedded defaults)
//! - **Matching**: Trimmed, lowercased input tested for substring membership
//! - **Effects**: A matching rule may carry a navigation target for the shell
//!
//! # Example
//!
//! ```ignore
//! use demodeck::responder::{default_rules, Responder};
//!
//! let responder = Responder::new(default_rules());
//!
//! if let Some(reply) = responder.respond("what's your pricing?") {
//!     println!("{}", reply.text);
//!     if let Some(view) = reply.navigate_to {
//!         println!("navigate to {:?}", view);
//!     }
//! }
//! ```

mod engine;
mod rules;
mod types;

pub use engine::Responder;
pub use rules::{default_rules, load_rules};
pub use types::*;
