use env_logger::Env;

/// Environment variable overriding the log filter, e.g. `SKELETON_LOG=trace`.
pub const LOG_ENV: &str = "SKELETON_LOG";

/// Initializes `env_logger`: `Debug` when verbose, `Info` otherwise, unless
/// [`LOG_ENV`] provides a filter.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
