//! Logger setup shared by the `xtool` and `rename-client` binaries.

/// Initializes `env_logger`.
///
/// Logging is silent unless `verbose` is set, so the stdout contract of the
/// commands stays byte-exact.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}
