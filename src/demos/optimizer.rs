//! Canned copy "optimization" results for the optimizer demo.

use serde::Serialize;

/// One suggested copy improvement with a confidence score (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationResult {
    pub category: String,
    pub original: String,
    pub improved: String,
    pub confidence_score: u8,
}

/// Produce the fixed two-category result set for a headline.
///
/// Blank/whitespace input yields `None`. Otherwise the returned set (one
/// "Headline" entry derived from the input, one fixed "CTA" entry) replaces
/// any previous set wholesale.
pub fn optimize(input: &str) -> Option<Vec<OptimizationResult>> {
    if input.trim().is_empty() {
        return None;
    }

    Some(vec![
        OptimizationResult {
            category: "Headline".to_string(),
            original: input.to_string(),
            improved: format!("{} - Proven Results", input),
            confidence_score: 92,
        },
        OptimizationResult {
            category: "CTA".to_string(),
            original: "Learn More".to_string(),
            improved: "Get Started Free".to_string(),
            confidence_score: 95,
        },
    ])
}
