//! Session login check, performed once per invocation.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use tracing::warn;

/// Compare the supplied pair with the configured operator credentials.
pub fn check(cfg: &Config, user: Option<&str>, password: Option<&str>) -> AppResult<()> {
    let ok = user == Some(cfg.gate_username.as_str())
        && password == Some(cfg.gate_password.as_str());

    if ok {
        Ok(())
    } else {
        warn!(user = user.unwrap_or(""), "login rejected");
        Err(AppError::AccessDenied)
    }
}
