//! Logger initialization for the command-line tool

use log::LevelFilter;

/// Install the global logger
///
/// An explicit level overrides `RUST_LOG`; without one, `RUST_LOG` is honored
/// and defaults to `info`. Calling this more than once keeps the first logger.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis();

    // A logger may already be installed by an embedding application or test
    let _ = builder.try_init();
}
