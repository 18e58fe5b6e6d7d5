//! Tracing subscriber setup
//!
//! Hosts call [`init_tracing`] once at startup. `RUST_LOG` wins when set;
//! otherwise the verbosity level picks the filter.

use tracing_subscriber::EnvFilter;

/// Filter for a verbosity level (`0` = warn, `1` = info, `2` = debug,
/// `3+` = trace).
pub fn filter_for_verbosity(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed (by the host or
/// an earlier call); the existing one is left in place.
pub fn init_tracing(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for_verbosity(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_levels() {
        assert_eq!(filter_for_verbosity(0).to_string(), "warn");
        assert_eq!(filter_for_verbosity(1).to_string(), "info");
        assert_eq!(filter_for_verbosity(2).to_string(), "debug");
        assert_eq!(filter_for_verbosity(3).to_string(), "trace");
        assert_eq!(filter_for_verbosity(9).to_string(), "trace");
    }

    #[test]
    fn test_second_init_is_harmless() {
        init_tracing(0);
        assert!(!init_tracing(1));
    }
}
