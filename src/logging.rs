//! Logging setup for binaries
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to
//! install a stderr subscriber; `RUST_LOG` takes precedence over the verbosity
//! flag when it is set.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level: 0 → warn, 1 → info, 2 → debug, 3+ → trace
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).to_string().to_lowercase()))
}

/// Install the global stderr subscriber
///
/// Calling it a second time is harmless; the first subscriber stays.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
