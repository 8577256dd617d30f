//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only carries the rendered sequences.

use tracing::Level;

/// Maps `-v` occurrences to a maximum level: none is WARN, one INFO, more DEBUG.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
