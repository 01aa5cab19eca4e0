use std::sync::{Arc, Mutex};
use std::time::Duration;

use demodeck::app::DemoApp;
use demodeck::chat::{MessageOrigin, REPLY_DELAY};
use demodeck::mailer::{MailComposer, MailDraft};
use demodeck::notifier::NOTIFICATION_TTL;
use demodeck::responder::{load_rules, Responder, ViewId};
use demodeck::shell::Navigator;

/// Composer that records every draft it is handed.
struct RecordingMailer {
    drafts: Mutex<Vec<MailDraft>>,
}

impl RecordingMailer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            drafts: Mutex::new(Vec::new()),
        })
    }
}

impl MailComposer for RecordingMailer {
    fn compose(&self, draft: &MailDraft) {
        self.drafts.lock().unwrap().push(draft.clone());
    }
}

/// Navigator that records every dispatched view switch.
struct RecordingNavigator {
    views: Mutex<Vec<ViewId>>,
}

impl RecordingNavigator {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            views: Mutex::new(Vec::new()),
        })
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, view: ViewId) {
        self.views.lock().unwrap().push(view);
    }
}

#[tokio::test(start_paused = true)]
async fn test_chat_demo_keyword_navigates_and_replies() {
    let mailer = RecordingMailer::new();
    let navigator = RecordingNavigator::new();
    let app = DemoApp::new(mailer, navigator.clone());

    let before = app.chat().messages().len();
    assert!(app.submit_chat("Tell me about your Demo"));
    assert!(app.chat().is_typing());

    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(50)).await;

    let messages = app.chat().messages();
    assert_eq!(messages.len(), before + 2, "Log grows by user + assistant");
    assert_eq!(messages[messages.len() - 1].origin, MessageOrigin::Assistant);
    assert!(messages[messages.len() - 1]
        .text
        .to_lowercase()
        .contains("demos"));
    assert_eq!(*navigator.views.lock().unwrap(), vec![ViewId::Demos]);
    assert!(!app.chat().is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_blank_chat_input_leaves_log_unchanged() {
    let app = DemoApp::headless();
    let before = app.chat().messages().len();

    assert!(!app.submit_chat("   "));
    tokio::time::sleep(REPLY_DELAY * 2).await;

    assert_eq!(app.chat().messages().len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_booking_flow_end_to_end() {
    let mailer = RecordingMailer::new();
    let navigator = RecordingNavigator::new();
    let mut app = DemoApp::new(mailer.clone(), navigator);

    // Incomplete form: silently rejected.
    app.set_booking_date("2026-08-10");
    app.confirm_booking();
    assert!(!app.booking().confirmed);
    assert!(mailer.drafts.lock().unwrap().is_empty());

    // Complete form: confirmed, mail composed, notification raised.
    app.set_booking_time("14:00");
    app.confirm_booking();
    assert!(app.booking().confirmed);
    assert_eq!(app.notification().as_deref(), Some("Booking confirmed!"));

    {
        let drafts = mailer.drafts.lock().unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].subject, "New Booking");
        assert_eq!(drafts[0].body, "Date: 2026-08-10\nTime: 14:00");
        assert!(drafts[0].mailto_url().starts_with("mailto:"));
    }

    // Terminal state: nothing new happens.
    app.confirm_booking();
    assert_eq!(mailer.drafts.lock().unwrap().len(), 1);

    // The notification clears on its own.
    tokio::time::sleep(NOTIFICATION_TTL + Duration::from_millis(50)).await;
    assert_eq!(app.notification(), None);
}

#[tokio::test(start_paused = true)]
async fn test_notification_supersession_across_widgets() {
    let mut app = DemoApp::headless();

    app.add_to_cart("Wireless Headphones - $79");
    assert_eq!(app.notification().as_deref(), Some("Added to cart!"));

    tokio::time::sleep(NOTIFICATION_TTL - Duration::from_millis(500)).await;
    app.run_optimizer("Launch week headline");

    // Past the first timer's expiry: the newer message must survive.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(app.notification().as_deref(), Some("Email opened!"));
}

#[tokio::test(start_paused = true)]
async fn test_widgets_are_independent() {
    let mut app = DemoApp::headless();

    app.run_search("bot");
    app.check_email("a@b");
    app.calculate_roi("1000", "5", "50");
    app.generate_palette("#000000");
    app.refresh_analytics();

    let titles: Vec<&str> = app.search_results().iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["AI Chatbot", "Lead Bot"]);

    assert!(!app.email_check().unwrap().is_valid);
    assert_eq!(app.roi_report().unwrap().monthly_gain, 875);
    assert_eq!(app.palette().unwrap().accent, "#ffffff");
    assert!(app.analytics().is_some());

    // Clearing the search query empties the results again.
    app.run_search("");
    assert!(app.search_results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_custom_rule_file_overrides_embedded_table() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rules.toml");
    std::fs::write(
        &path,
        r#"
            fallback = "Ask me about the roadmap!"

            [[rules]]
            keyword = "roadmap"
            reply = "The roadmap ships quarterly."
        "#,
    )
    .expect("Failed to write rule file");

    let rules = load_rules(&path).expect("Failed to load rule file");
    let responder = Responder::new(rules);

    let reply = responder.respond("what's on the ROADMAP?").unwrap();
    assert_eq!(reply.text, "The roadmap ships quarterly.");
    assert_eq!(reply.navigate_to, None);

    let reply = responder.respond("pricing?").unwrap();
    assert_eq!(reply.text, "Ask me about the roadmap!", "Embedded rules must not leak in");
}

#[tokio::test(start_paused = true)]
async fn test_load_rules_rejects_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    assert!(load_rules(&dir.path().join("nope.toml")).is_err());
}
