//! Structured logging on stderr.
//!
//! The filter comes from `LABEX_LOG` (`RUST_LOG` syntax) and defaults to
//! `warn`, so command output on stdout is never interleaved with logs.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LABEX_LOG";
const DEFAULT_FILTER: &str = "warn";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// A subscriber that is already installed wins; later calls are no-ops.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(EnvFilter::new(DEFAULT_FILTER).to_string(), "warn");
    }
}
