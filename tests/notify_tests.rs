mod common;
use common::Sandbox;
use mocboard::errors::{AppError, AppResult};
use mocboard::models::{Level, PromotionSummary};
use mocboard::notify::{
    MailCredentials, MailTransport, NotifyOutcome, SUBJECT, SmtpMailer, build_body,
    send_promotion_alert,
};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<(String, String, String, String)>>,
    fail: bool,
}

impl MailTransport for RecordingTransport {
    fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Mail("connection refused".to_string()));
        }
        self.sent.borrow_mut().push((
            from.to_string(),
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        Ok(())
    }
}

fn candidates() -> Vec<PromotionSummary> {
    vec![PromotionSummary {
        staff_name: "Dave".to_string(),
        level: Level::Three,
        moc_count: 5,
        hours_spent: 20.0,
    }]
}

#[test]
fn test_body_lists_each_candidate() {
    let body = build_body(&candidates());
    assert_eq!(
        body,
        "Staff eligible for promotion:\n\n- Dave | Level 3 | 5 MOCs | 20 Hours\n"
    );
}

#[test]
fn test_alert_goes_to_operator_mailbox() {
    mocboard::logging::init_test();
    let transport = RecordingTransport::default();
    let outcome = send_promotion_alert(&transport, Some("ops@example.com"), &candidates());

    assert_eq!(outcome, NotifyOutcome::Sent);
    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    let (from, to, subject, body) = &sent[0];
    assert_eq!(from, "ops@example.com");
    assert_eq!(to, "ops@example.com");
    assert_eq!(subject, SUBJECT);
    assert!(body.contains("- Dave | Level 3 | 5 MOCs | 20 Hours"));
}

#[test]
fn test_transport_failure_is_an_outcome() {
    let transport = RecordingTransport {
        fail: true,
        ..Default::default()
    };
    let outcome = send_promotion_alert(&transport, Some("ops@example.com"), &candidates());

    match outcome {
        NotifyOutcome::Failed(reason) => assert!(reason.contains("connection refused")),
        NotifyOutcome::Sent => panic!("expected failure"),
    }
}

#[test]
fn test_missing_account_fails_at_send_time() {
    let transport = RecordingTransport::default();
    let outcome = send_promotion_alert(&transport, None, &candidates());

    assert!(!outcome.is_sent());
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn test_smtp_mailer_without_password_fails_before_connecting() {
    let mailer = SmtpMailer::new(
        "smtp.invalid",
        587,
        MailCredentials {
            user: Some("ops@example.com".to_string()),
            password: None,
        },
    );
    let outcome = send_promotion_alert(&mailer, Some("ops@example.com"), &candidates());

    match outcome {
        NotifyOutcome::Failed(reason) => assert!(reason.contains("EMAIL_PASS")),
        NotifyOutcome::Sent => panic!("expected failure"),
    }
}

#[test]
fn test_promote_email_failure_does_not_fail_command() {
    let sb = Sandbox::new();
    sb.seed(&[("Dave", "A", 12.0, 2, "May"), ("Dave", "B", 8.0, 3, "May")]);

    sb.session()
        .args(["promote", "--email"])
        .assert()
        .success()
        .stdout(contains("Dave"))
        .stderr(contains("Email failed").and(contains("EMAIL_USER")));
}
