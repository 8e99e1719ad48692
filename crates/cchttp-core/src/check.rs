//! Outcome classification and the plugin stdout contract.
//!
//! Exactly one `CheckOutcome` is produced per invocation; the printed line and
//! exit code are a pure function of the configuration and the HTTP response
//! (or transport error).

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::CheckConfig;
use crate::http::{self, HttpExchange};
use crate::status::ServiceState;

/// Terminal result of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No well-formed HTTP response (DNS, connect, TLS, timeout).
    TransportFailed { message: String },
    /// Response code differed from the expected one (string comparison).
    StatusMismatch { expected: String, actual: String },
    /// Body did not match the configured pattern.
    BodyMismatch { pattern: String },
    /// All expectations held.
    Ok { status_line: String },
}

impl CheckOutcome {
    /// First (authoritative) stdout line for monitoring integration.
    pub fn plugin_line(&self) -> String {
        match self {
            CheckOutcome::TransportFailed { message } => {
                format!("HTTP CRITICAL - {}", message)
            }
            CheckOutcome::StatusMismatch { expected, actual } => format!(
                "HTTP CRITICAL - expected HTTP code {} but actually got {}",
                expected, actual
            ),
            CheckOutcome::BodyMismatch { pattern } => format!(
                "HTTP CRITICAL - HTTP response did not contain expected string {}",
                pattern
            ),
            CheckOutcome::Ok { status_line } => format!("HTTP OK: {}", status_line),
        }
    }

    pub fn service_state(&self) -> ServiceState {
        match self {
            CheckOutcome::Ok { .. } => ServiceState::Ok,
            _ => ServiceState::Critical,
        }
    }
}

/// Classifies a completed exchange against the configured expectations.
///
/// The response code is compared to `expect_rc` as a string, and the body
/// pattern is interpreted as a regex rather than a literal substring. Both
/// are compatibility behaviors; see DESIGN.md.
pub fn evaluate(cfg: &CheckConfig, exchange: &HttpExchange) -> Result<CheckOutcome> {
    let actual = exchange.code.to_string();
    if actual != cfg.expect_rc {
        return Ok(CheckOutcome::StatusMismatch {
            expected: cfg.expect_rc.clone(),
            actual,
        });
    }

    if let Some(pattern) = cfg.body_pattern.as_deref().filter(|p| !p.is_empty()) {
        let re = Regex::new(pattern)
            .with_context(|| format!("invalid body pattern {:?}", pattern))?;
        if !re.is_match(&exchange.body) {
            return Ok(CheckOutcome::BodyMismatch {
                pattern: pattern.to_string(),
            });
        }
    }

    Ok(CheckOutcome::Ok {
        status_line: exchange.status_line.clone(),
    })
}

/// Issues the single GET and classifies the result. A transport failure is a
/// terminal outcome, not an `Err`; `Err` is reserved for an uncompilable body
/// pattern (which the CLI rejects before any network I/O).
pub fn run(cfg: &CheckConfig) -> Result<CheckOutcome> {
    match http::fetch(cfg) {
        Ok(exchange) => evaluate(cfg, &exchange),
        Err(err) => Ok(CheckOutcome::TransportFailed {
            message: err.to_string(),
        }),
    }
}
