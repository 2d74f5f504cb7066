//! Tracing subscriber setup
//!
//! Logs go to stderr so command feedback on stdout stays clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Level for the configured verbosity raised by `-v` flags.
///
/// Each flag steps up one level: WARN, INFO, DEBUG, TRACE.
pub fn level_filter(verbosity: Verbosity, verbose_flags: u8) -> LevelFilter {
    let base: u8 = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    match base.saturating_add(verbose_flags) {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `level`.
///
/// Calling twice is harmless; the second call is ignored.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(%level, "logging initialised");
}
