//! Application controller: one aggregate owning every demo's state.
//!
//! UI event handlers call the named methods below; the rendering layer
//! reads state back through the accessors or as one JSON snapshot. All
//! mutation goes through this controller, so no component shares mutable
//! state with another - the notification channel is the only crossover,
//! and it is owned here too.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::chat::{ChatMessage, ChatSession};
use crate::demos::{
    analytics, optimizer, palette, roi, search, validator, AnalyticsSnapshot, BookingState, Cart,
    CatalogItem, ColorPalette, EmailCheck, OptimizationResult, RoiReport,
};
use crate::error::DemodeckError;
use crate::mailer::{MailComposer, MailDraft, NoopMailComposer};
use crate::notifier::Notifier;
use crate::responder::{default_rules, Responder, RulesConfig};
use crate::shell::{Navigator, NoopNavigator};

/// The engine behind the single-page site: chat, demo widgets, and the
/// notification channel, driven entirely by shell event handlers.
pub struct DemoApp {
    notifier: Notifier,
    mailer: Arc<dyn MailComposer>,
    chat: ChatSession,
    optimizer_results: Vec<OptimizationResult>,
    roi_report: Option<RoiReport>,
    search_results: Vec<CatalogItem>,
    email_check: Option<EmailCheck>,
    cart: Cart,
    palette: Option<ColorPalette>,
    analytics: Option<AnalyticsSnapshot>,
    booking: BookingState,
}

impl DemoApp {
    /// Create an app with the embedded responder rules.
    pub fn new(mailer: Arc<dyn MailComposer>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_rules(default_rules(), mailer, navigator)
    }

    /// Create an app with a custom responder rule table.
    pub fn with_rules(
        rules: RulesConfig,
        mailer: Arc<dyn MailComposer>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let responder = Arc::new(Responder::new(rules));
        Self {
            notifier: Notifier::new(),
            mailer,
            chat: ChatSession::new(responder, navigator),
            optimizer_results: Vec::new(),
            roi_report: None,
            search_results: Vec::new(),
            email_check: None,
            cart: Cart::new(),
            palette: None,
            analytics: None,
            booking: BookingState::new(),
        }
    }

    /// Create an app with no-op shell collaborators.
    pub fn headless() -> Self {
        Self::new(Arc::new(NoopMailComposer), Arc::new(NoopNavigator))
    }

    // --- chat ---

    /// Forward user input to the chat session. Blank input is a no-op.
    pub fn submit_chat(&self, input: &str) -> bool {
        self.chat.submit(input)
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    // --- optimizer demo ---

    /// Run the copy optimizer. Blank input leaves the results untouched;
    /// otherwise the result set is replaced and a usage mail is composed.
    pub fn run_optimizer(&mut self, input: &str) {
        let Some(results) = optimizer::optimize(input) else {
            return;
        };
        self.optimizer_results = results;
        self.send_mail("AI Optimizer Used", format!("Headline: {}", input));
    }

    // --- ROI calculator demo ---

    /// Recalculate the projection from raw form fields. Unparseable
    /// fields count as zero.
    pub fn calculate_roi(&mut self, visitors: &str, rate: &str, order_value: &str) {
        self.roi_report = Some(roi::calculate(
            roi::parse_or_zero(visitors),
            roi::parse_or_zero(rate),
            roi::parse_or_zero(order_value),
        ));
    }

    // --- live search demo ---

    /// Recompute search results for the current query.
    pub fn run_search(&mut self, query: &str) {
        self.search_results = search::search(query);
    }

    // --- email validator demo ---

    pub fn check_email(&mut self, candidate: &str) {
        self.email_check = Some(validator::validate(candidate));
    }

    // --- cart demo ---

    /// Append an item and flash the confirmation notification.
    pub fn add_to_cart(&mut self, label: &str) {
        self.cart.add(label);
        self.notifier.show("Added to cart!");
    }

    // --- palette demo ---

    /// Regenerate the palette. A malformed seed changes nothing visible.
    pub fn generate_palette(&mut self, seed: &str) {
        match palette::generate(seed) {
            Ok(p) => self.palette = Some(p),
            Err(e) => warn!("Palette generation skipped: {}", e),
        }
    }

    // --- analytics demo ---

    pub fn refresh_analytics(&mut self) {
        self.analytics = Some(analytics::generate());
    }

    // --- booking demo ---

    pub fn set_booking_date(&mut self, date: &str) {
        self.booking.set_date(date);
    }

    pub fn set_booking_time(&mut self, time: &str) {
        self.booking.set_time(time);
    }

    /// Confirm the booking if the form is complete. On the transition a
    /// booking mail is composed and the confirmation notification shown;
    /// an incomplete form does nothing.
    pub fn confirm_booking(&mut self) {
        if !self.booking.confirm() {
            return;
        }
        info!("Booking confirmed for {} {}", self.booking.date, self.booking.time);
        let body = format!("Date: {}\nTime: {}", self.booking.date, self.booking.time);
        self.send_mail("New Booking", body);
        self.notifier.show("Booking confirmed!");
    }

    // --- contact form ---

    /// Compose an inquiry mail from the contact form fields verbatim.
    pub fn submit_inquiry(&self, name: &str, email: &str, message: &str) {
        self.send_mail(
            format!("New Inquiry from {}", name),
            format!("Email: {}\n\n{}", email, message),
        );
    }

    fn send_mail(&self, subject: impl Into<String>, body: impl Into<String>) {
        let draft = MailDraft::new(subject, body);
        info!("Composing mail: {}", draft.subject);
        self.mailer.compose(&draft);
        self.notifier.show("Email opened!");
    }

    // --- render-facing accessors ---

    pub fn notification(&self) -> Option<String> {
        self.notifier.current()
    }

    pub fn optimizer_results(&self) -> &[OptimizationResult] {
        &self.optimizer_results
    }

    pub fn roi_report(&self) -> Option<RoiReport> {
        self.roi_report
    }

    pub fn search_results(&self) -> &[CatalogItem] {
        &self.search_results
    }

    pub fn email_check(&self) -> Option<&EmailCheck> {
        self.email_check.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn palette(&self) -> Option<&ColorPalette> {
        self.palette.as_ref()
    }

    pub fn analytics(&self) -> Option<&AnalyticsSnapshot> {
        self.analytics.as_ref()
    }

    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    /// Serialize the full render-facing state for the shell.
    pub fn snapshot_json(&self) -> Result<String, DemodeckError> {
        let snapshot = RenderState {
            messages: self.chat.messages(),
            is_typing: self.chat.is_typing(),
            notification: self.notifier.current(),
            optimizer_results: &self.optimizer_results,
            roi_report: self.roi_report,
            search_results: &self.search_results,
            email_check: &self.email_check,
            cart: &self.cart,
            palette: &self.palette,
            analytics: &self.analytics,
            booking: &self.booking,
        };
        serde_json::to_string(&snapshot).map_err(|e| DemodeckError::Snapshot(e.to_string()))
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::headless()
    }
}

/// Everything the rendering layer needs, in one serializable view.
#[derive(Serialize)]
struct RenderState<'a> {
    messages: Vec<ChatMessage>,
    is_typing: bool,
    notification: Option<String>,
    optimizer_results: &'a [OptimizationResult],
    roi_report: Option<RoiReport>,
    search_results: &'a [CatalogItem],
    email_check: &'a Option<EmailCheck>,
    cart: &'a Cart,
    palette: &'a Option<ColorPalette>,
    analytics: &'a Option<AnalyticsSnapshot>,
    booking: &'a BookingState,
}
