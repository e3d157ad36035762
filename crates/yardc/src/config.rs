#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::signing::TokenSigner;

/// Environment variable that overrides the configured signing secret.
pub const SECRET_ENV: &str = "YARDC_JWT_SECRET";
/// Environment variable that overrides the logging filter.
pub const LOG_ENV: &str = "YARDC_LOG";
/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "yardc.toml";

/// Process-wide settings, loaded once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Symmetric secret for token signing.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Logging filter, e.g. `info` or `yard_pack=debug`.
    #[serde(default)]
    pub log: Option<String>,
}

impl Config {
    /// Loads the config file (explicit path, or `yardc.toml` if present) and
    /// applies environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(config.with_secret_override(std::env::var(SECRET_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("{} is not a valid yardc config", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Replaces the secret when `secret` is set and non-empty.
    pub fn with_secret_override(mut self, secret: Option<String>) -> Self {
        if let Some(secret) = secret.filter(|value| !value.is_empty()) {
            self.jwt_secret = Some(secret);
        }
        self
    }

    /// Builds the token signer from the configured secret.
    pub fn signer(&self) -> Result<TokenSigner> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            anyhow!(
                "no signing secret configured; set {SECRET_ENV} or jwt_secret in {DEFAULT_CONFIG_FILE}"
            )
        })?;
        Ok(TokenSigner::new(secret)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_keys() {
        let config = Config::from_toml_str("jwt_secret = \"s3cret\"\nlog = \"debug\"\n")
            .expect("config parses");
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml_str("secret = \"oops\"\n").is_err());
    }

    #[test]
    fn environment_secret_wins_unless_empty() {
        let base = Config::from_toml_str("jwt_secret = \"file\"\n").expect("config parses");

        let overridden = base.clone().with_secret_override(Some("env".to_string()));
        assert_eq!(overridden.jwt_secret.as_deref(), Some("env"));

        let kept = base.with_secret_override(Some(String::new()));
        assert_eq!(kept.jwt_secret.as_deref(), Some("file"));
    }

    #[test]
    fn missing_secret_is_reported() {
        let err = Config::default().signer().expect_err("no secret");
        assert!(err.to_string().contains(SECRET_ENV));
    }
}
