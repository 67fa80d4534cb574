//! Promotion alert e-mail.
//!
//! The alert goes to a single operator mailbox, which is also the sender.
//! Failures are reported as an outcome, never propagated.

mod smtp;

pub use smtp::SmtpMailer;

use crate::errors::AppResult;
use crate::models::PromotionSummary;
use crate::utils::formatting::summary_line;
use std::env;
use tracing::{error, info};

pub const SUBJECT: &str = "MOC Promotion Candidates";
pub const USER_ENV: &str = "EMAIL_USER";
pub const PASS_ENV: &str = "EMAIL_PASS";

/// Mail account identity, read once at process start.
/// Missing values only matter when a message is actually sent.
#[derive(Debug, Clone, Default)]
pub struct MailCredentials {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl MailCredentials {
    pub fn from_env() -> Self {
        Self {
            user: env::var(USER_ENV).ok().filter(|v| !v.trim().is_empty()),
            password: env::var(PASS_ENV).ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Something that can deliver one plain-text message.
pub trait MailTransport {
    fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    Failed(String),
}

impl NotifyOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotifyOutcome::Sent)
    }
}

/// `"Staff eligible for promotion:\n\n"` + one `"- ..."` line per row.
pub fn build_body(rows: &[PromotionSummary]) -> String {
    let mut body = String::from("Staff eligible for promotion:\n\n");
    for row in rows {
        body.push_str("- ");
        body.push_str(&summary_line(row, "Hours"));
        body.push('\n');
    }
    body
}

/// Send the alert for `rows` to `operator` (sender and recipient).
pub fn send_promotion_alert<T: MailTransport + ?Sized>(
    transport: &T,
    operator: Option<&str>,
    rows: &[PromotionSummary],
) -> NotifyOutcome {
    let Some(address) = operator else {
        error!("mail account not configured");
        return NotifyOutcome::Failed(format!("{USER_ENV} is not set"));
    };

    let body = build_body(rows);

    match transport.send(address, address, SUBJECT, &body) {
        Ok(()) => {
            info!(rows = rows.len(), "promotion alert sent");
            NotifyOutcome::Sent
        }
        Err(e) => {
            error!(error = %e, "promotion alert failed");
            NotifyOutcome::Failed(e.to_string())
        }
    }
}
