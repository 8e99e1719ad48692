//! CLI for the check_client_http monitoring plugin.

use std::path::PathBuf;

use anyhow::Result;
use cchttp_core::check;
use cchttp_core::config::{self, CheckConfig};
use clap::Parser;
use regex::Regex;

/// Issues one HTTPS GET authenticated with a client TLS certificate and
/// checks the response against the expected status code and body pattern.
#[derive(Debug, Parser)]
#[command(name = "check_client_http")]
#[command(about = "HTTP(S) check with client certificate authentication", long_about = None)]
pub struct Cli {
    /// Host name or address to check.
    #[arg(short = 'H', long)]
    pub host: String,

    /// TCP port to connect to.
    #[arg(short = 'p', long, default_value = config::DEFAULT_PORT)]
    pub port: String,

    /// Use SSL/TLS. This is already the default; the flag is kept for
    /// compatibility with existing check definitions.
    #[arg(short = 'S', long = "ssl")]
    pub ssl: bool,

    /// Request path, sent as given (no escaping).
    #[arg(short = 'u', long, default_value = config::DEFAULT_URI)]
    pub uri: String,

    /// PEM client certificate (leaf, optionally with its chain appended).
    #[arg(long = "clientcert", value_name = "FILE")]
    pub clientcert: Option<PathBuf>,

    /// PEM private key for the client certificate.
    #[arg(short = 'K', long = "private-key", value_name = "FILE")]
    pub private_key: Option<PathBuf>,

    /// CA bundle to validate the server certificate against, instead of the
    /// system trust roots.
    #[arg(long = "CAfile", value_name = "FILE")]
    pub ca_file: Option<PathBuf>,

    /// Check the server certificate against the connection hostname (1) or
    /// skip that check (0). Disabling this is insecure.
    #[arg(
        long = "verify_hostname",
        value_name = "0|1",
        value_parser = clap::value_parser!(u8).range(0..=1)
    )]
    pub verify_hostname: Option<u8>,

    /// HTTP status code the response must carry.
    #[arg(short = 'e', long = "expect-rc", default_value = config::DEFAULT_EXPECT_RC)]
    pub expect_rc: String,

    /// Pattern the response body must match (regex semantics).
    #[arg(short = 's', long = "string", value_parser = parse_body_pattern)]
    pub string: Option<String>,

    /// Budget for the whole request/response cycle, in seconds.
    #[arg(short = 't', long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print informational lines before the final status line.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Rejects uncompilable body patterns at parse time, before any network I/O.
fn parse_body_pattern(s: &str) -> Result<String, String> {
    Regex::new(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

impl Cli {
    pub fn into_config(self) -> CheckConfig {
        let mut cfg = CheckConfig::new(self.host);
        cfg.port = self.port;
        if self.ssl {
            // Already the default; presence of -S can only set it.
            cfg.use_ssl = true;
        }
        cfg.uri = self.uri;
        cfg.client_cert = self.clientcert;
        cfg.private_key = self.private_key;
        cfg.ca_file = self.ca_file;
        if let Some(v) = self.verify_hostname {
            cfg.verify_hostname = v != 0;
        }
        cfg.expect_rc = self.expect_rc;
        cfg.body_pattern = self.string;
        cfg.timeout_secs = self.timeout;
        cfg.verbose = self.verbose;
        cfg
    }
}

/// Runs the configured check and returns the process exit code. Prints the
/// authoritative plugin line last, after any verbose informational lines.
pub fn run_check(cfg: &CheckConfig) -> Result<i32> {
    tracing::debug!("configuration: {:?}", cfg);

    if cfg.verbose {
        println!("GET {}", cfg.target_url());
        println!("expecting HTTP code {}", cfg.expect_rc);
        if let Some(pattern) = &cfg.body_pattern {
            println!("expecting body to match {}", pattern);
        }
    }

    let outcome = check::run(cfg)?;
    println!("{}", outcome.plugin_line());
    Ok(outcome.service_state().exit_code())
}
