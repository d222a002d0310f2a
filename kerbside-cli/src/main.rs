//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use kerbside_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match kerbside_cli::run() {
        Ok(()) => {}
        // Clap renders help and version output itself and picks the exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("kerbside: {err}");
            std::process::exit(1);
        }
    }
}
