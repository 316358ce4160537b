#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = swipenav_harness::cli::run_from_env() {
        tracing::error!(%error, "replay failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
