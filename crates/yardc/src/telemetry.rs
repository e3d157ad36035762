use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LOG_ENV};

/// Default filter when neither the environment, the CLI nor the config set one.
pub const DEFAULT_FILTER: &str = "info";

/// Picks the logging filter: `YARDC_LOG`, then `--log`, then the config file.
pub fn resolve_env_filter(cli_filter: Option<&str>, config: &Config) -> String {
    choose_filter(std::env::var(LOG_ENV).ok(), cli_filter, config)
}

fn choose_filter(from_env: Option<String>, cli_filter: Option<&str>, config: &Config) -> String {
    from_env
        .or_else(|| cli_filter.map(str::to_string))
        .or_else(|| config.log.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the stderr log subscriber. Subsequent calls are no-ops.
pub fn install(filter: &str) {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_log(log: &str) -> Config {
        Config {
            log: Some(log.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn environment_wins_over_everything() {
        let filter = choose_filter(
            Some("trace".to_string()),
            Some("debug"),
            &config_with_log("warn"),
        );
        assert_eq!(filter, "trace");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(choose_filter(None, Some("debug"), &config_with_log("warn")), "debug");
    }

    #[test]
    fn config_then_default() {
        assert_eq!(choose_filter(None, None, &config_with_log("warn")), "warn");
        assert_eq!(choose_filter(None, None, &Config::default()), DEFAULT_FILTER);
    }
}
