use cchttp_core::logging;
use cchttp_core::status::ServiceState;
use clap::error::ErrorKind;
use clap::Parser;

mod cli;

fn main() {
    // clap's default error exit code is 2, which would collide with CRITICAL,
    // so argument errors are mapped to UNKNOWN by hand.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => ServiceState::Unknown.exit_code(),
            };
            std::process::exit(code);
        }
    };

    logging::init_logging_stderr(cli.verbose);

    let cfg = cli.into_config();
    match cli::run_check(&cfg) {
        Ok(code) => std::process::exit(code),
        // Only an uncompilable body pattern ends up here, and parse-time
        // validation already rejects those.
        Err(err) => {
            eprintln!("check_client_http error: {:#}", err);
            std::process::exit(ServiceState::Unknown.exit_code());
        }
    }
}
