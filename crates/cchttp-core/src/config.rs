//! Immutable check configuration and target URL construction.
//!
//! Built once by the CLI parser and passed by reference to the fetch and
//! evaluation logic. Defaults live here as literal constants so the CLI and
//! the library agree on them.

use std::path::PathBuf;

pub const DEFAULT_PORT: &str = "443";
pub const DEFAULT_URI: &str = "/";
pub const DEFAULT_EXPECT_RC: &str = "200";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for a single check invocation.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Host name or address to connect to.
    pub host: String,
    /// TCP port, kept as a string because it is only ever spliced into the URL.
    pub port: String,
    /// Use https:// (true) or http:// (false) as the URL scheme.
    pub use_ssl: bool,
    /// Request path, sent as given (no escaping).
    pub uri: String,
    /// PEM client certificate presented during the TLS handshake. The file may
    /// contain the leaf plus its chain concatenated.
    pub client_cert: Option<PathBuf>,
    /// PEM private key matching the client certificate.
    pub private_key: Option<PathBuf>,
    /// CA bundle overriding the system trust roots for peer validation.
    pub ca_file: Option<PathBuf>,
    /// When false, the server certificate is not checked against the
    /// connection hostname. Insecure; kept for compatibility.
    pub verify_hostname: bool,
    /// Expected HTTP status code, compared as a string.
    pub expect_rc: String,
    /// Pattern the response body must match, interpreted as a regex.
    pub body_pattern: Option<String>,
    /// Budget for the whole request/response cycle, in seconds.
    pub timeout_secs: u64,
    /// Print informational lines before the final status line.
    pub verbose: bool,
}

impl CheckConfig {
    /// New configuration for `host` with every optional field at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT.to_string(),
            use_ssl: true,
            uri: DEFAULT_URI.to_string(),
            client_cert: None,
            private_key: None,
            ca_file: None,
            verify_hostname: true,
            expect_rc: DEFAULT_EXPECT_RC.to_string(),
            body_pattern: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }

    /// URL the check will request: `{scheme}://{host}:{port}{uri}`.
    /// Components are spliced verbatim; the caller supplies a well-formed path.
    pub fn target_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}:{}{}", scheme, self.host, self.port, self.uri)
    }
}
