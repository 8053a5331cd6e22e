// clipflip-cli/src/logging.rs
//
// Logging setup for the clipflip CLI. Uses the standard `log` crate with
// `env_logger` as the backend, honoring RUST_LOG:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information

/// Initializes env_logger. `--verbose` lowers the default filter to debug;
/// an explicit RUST_LOG still wins.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to tag conversion runs in the log.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
