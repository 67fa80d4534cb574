use super::{MailCredentials, MailTransport, PASS_ENV, USER_ENV};
use crate::errors::{AppError, AppResult};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

/// Authenticated STARTTLS submission (one connection per message).
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: MailCredentials,
}

impl SmtpMailer {
    pub fn new(host: &str, port: u16, credentials: MailCredentials) -> Self {
        Self {
            host: host.to_string(),
            port,
            credentials,
        }
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let user = self
            .credentials
            .user
            .clone()
            .ok_or_else(|| AppError::Mail(format!("{USER_ENV} is not set")))?;
        let password = self
            .credentials
            .password
            .clone()
            .ok_or_else(|| AppError::Mail(format!("{PASS_ENV} is not set")))?;

        let from: Mailbox = from.parse().map_err(mail_error)?;
        let to: Mailbox = to.parse().map_err(mail_error)?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(mail_error)?;

        let transport = SmtpTransport::starttls_relay(&self.host)
            .map_err(mail_error)?
            .port(self.port)
            .credentials(Credentials::new(user, password))
            .build();

        debug!(host = %self.host, port = self.port, "sending mail");
        transport.send(&message).map_err(mail_error)?;
        Ok(())
    }
}

fn mail_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Mail(e.to_string())
}
