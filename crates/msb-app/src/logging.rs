//! Log filter selection.
//!
//! `--log-level` wins over `RUST_LOG`, which wins over `[logging] level`.

use msb_config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter used when nothing else parses.
const FALLBACK_DIRECTIVE: &str = "warn,msb=info";

const LEVEL_NAMES: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Scope a bare level to the MSB crates, leaving dependencies at `warn`.
fn scoped(level: &str) -> String {
    format!("warn,msb={level}")
}

/// Pick the filter directive from the three sources.
pub(crate) fn log_directive(cli: Option<&str>, env: Option<&str>, config: LogLevel) -> String {
    if let Some(cli) = cli.map(str::trim).filter(|s| !s.is_empty()) {
        let lower = cli.to_ascii_lowercase();
        return if LEVEL_NAMES.contains(&lower.as_str()) {
            scoped(&lower)
        } else {
            cli.to_string()
        };
    }
    if let Some(env) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    scoped(config.as_str())
}

/// Build an `EnvFilter`, falling back when the directive does not parse.
pub(crate) fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter {directive:?}: {e}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins() {
        assert_eq!(
            log_directive(Some("debug"), Some("trace"), LogLevel::Error),
            "warn,msb=debug"
        );
    }

    #[test]
    fn cli_level_is_case_insensitive() {
        assert_eq!(
            log_directive(Some("WARN"), None, LogLevel::Info),
            "warn,msb=warn"
        );
    }

    #[test]
    fn cli_directive_passes_through() {
        assert_eq!(
            log_directive(Some("msb_layout=trace"), None, LogLevel::Info),
            "msb_layout=trace"
        );
    }

    #[test]
    fn env_beats_config() {
        assert_eq!(
            log_directive(None, Some("msb=trace"), LogLevel::Error),
            "msb=trace"
        );
    }

    #[test]
    fn blank_sources_fall_through_to_config() {
        assert_eq!(
            log_directive(Some("  "), Some(""), LogLevel::Debug),
            "warn,msb=debug"
        );
    }

    #[test]
    fn config_default_is_info() {
        assert_eq!(
            log_directive(None, None, LogLevel::default()),
            "warn,msb=info"
        );
    }
}
