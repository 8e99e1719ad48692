//! Logging init: stderr only, so stdout stays reserved for the plugin line.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` wins when set;
/// otherwise `--verbose` raises the check crates to debug.
pub fn init_logging_stderr(verbose: bool) {
    let default_filter = if verbose {
        "info,cchttp_core=debug,check_client_http=debug"
    } else {
        "info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
