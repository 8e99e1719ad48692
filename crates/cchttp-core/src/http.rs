//! Single HTTP(S) GET with optional client-certificate authentication.
//!
//! Uses the curl crate (libcurl). TLS material is handed to libcurl as file
//! paths; a missing or unparseable certificate/key surfaces as a curl error
//! when the transfer is performed, not as a separate validation phase.

use std::str;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::config::CheckConfig;

/// Everything evaluation needs from a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    /// Numeric response code as reported by libcurl.
    pub code: u32,
    /// Raw status line, e.g. `HTTP/1.1 200 OK`.
    pub status_line: String,
    /// Decoded response body (lossy UTF-8).
    pub body: String,
}

/// Failure before a well-formed HTTP response was obtained: DNS, connect,
/// TLS handshake, certificate/key load, timeout. One tier, no sub-causes.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("no HTTP status line received")]
    MissingStatusLine,
}

/// Performs one GET against `cfg.target_url()`. No redirects, no retries.
pub fn fetch(cfg: &CheckConfig) -> Result<HttpExchange, TransportError> {
    let url = cfg.target_url();
    let mut status_line = String::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&url)?;
    easy.get(true)?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    if let Some(cert) = &cfg.client_cert {
        // The file may hold the leaf plus its chain; libcurl sends all of it.
        easy.ssl_cert(cert)?;
        easy.ssl_cert_type("PEM")?;
    }
    if let Some(key) = &cfg.private_key {
        easy.ssl_key(key)?;
        easy.ssl_key_type("PEM")?;
    }
    if let Some(ca) = &cfg.ca_file {
        // Validate the peer against this bundle instead of the system roots.
        easy.cainfo(ca)?;
    }
    if !cfg.verify_hostname {
        // Insecure compatibility escape hatch: the chain is still validated,
        // but the certificate is not matched against the connection hostname.
        easy.ssl_verify_host(false)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            // Keep the most recent status line (skips 1xx interim responses).
            if let Ok(s) = str::from_utf8(data) {
                let s = s.trim_end();
                if s.starts_with("HTTP/") {
                    status_line = s.to_string();
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if status_line.is_empty() {
        return Err(TransportError::MissingStatusLine);
    }
    debug!("GET {} -> {} ({} body bytes)", url, status_line, body.len());

    Ok(HttpExchange {
        code,
        status_line,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
