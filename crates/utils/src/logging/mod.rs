//! Log subscriber setup
//!
//! stdout belongs to the Nagios status line, so every log event goes to
//! stderr. `CHECK_JSON_LOG` takes `RUST_LOG`-style directives and overrides
//! the level chosen from the command line.

use check_json_core::{Error, Result, CHECK_JSON_LOG_VAR};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize the tracing system
pub fn init(default_level: LevelFilter) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(CHECK_JSON_LOG_VAR)
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))
}

/// Level implied by the `--verbose` and `--debug` flags
#[must_use]
pub fn verbosity_filter(verbose: bool, debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::DEBUG
    } else if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_verbose() {
        assert_eq!(verbosity_filter(false, false), LevelFilter::WARN);
        assert_eq!(verbosity_filter(true, false), LevelFilter::INFO);
        assert_eq!(verbosity_filter(true, true), LevelFilter::DEBUG);
        assert_eq!(verbosity_filter(false, true), LevelFilter::DEBUG);
    }

    #[test]
    fn second_init_reports_an_error() {
        let _ = init(LevelFilter::WARN);

        assert!(matches!(init(LevelFilter::WARN), Err(Error::Logging { .. })));
    }
}
