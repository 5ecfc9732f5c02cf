//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform paths plus the access-key lookup consulted by the HTTP client on
//! every request.

pub mod paths;

pub use paths::{config_file_path, get_data_dir, CONFIG_PATH_ENV};

use crate::domain::FetchError;
use crate::Config;

/// Where the API access key comes from.
///
/// The key is never cached: [`AccessKey::resolve`] reads the environment at
/// call time, so a missing key surfaces as a [`FetchError`] on the request that
/// needed it rather than failing startup.
#[derive(Clone, PartialEq, Eq)]
pub enum AccessKey {
    /// Key given directly in the configuration file.
    Static(String),
    /// Name of the environment variable holding the key.
    Env(String),
}

impl AccessKey {
    /// Prefers an explicit configured key over the environment variable.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .access_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .map_or_else(
                || Self::Env(config.access_key_env.clone()),
                |key| Self::Static(key.trim().to_string()),
            )
    }

    /// Returns the key to send with the next request.
    ///
    /// # Errors
    ///
    /// [`FetchError::MissingAccessKey`] when the variable is unset, empty or
    /// not valid unicode.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixgrid::infrastructure::AccessKey;
    ///
    /// let key = AccessKey::Static("abc".to_string());
    /// assert_eq!(key.resolve().unwrap(), "abc");
    ///
    /// let missing = AccessKey::Env("PIXGRID_DOCTEST_UNSET_KEY".to_string());
    /// assert!(missing.resolve().is_err());
    /// ```
    pub fn resolve(&self) -> Result<String, FetchError> {
        match self {
            Self::Static(key) => Ok(key.clone()),
            Self::Env(var) => std::env::var(var)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| FetchError::MissingAccessKey(var.clone())),
        }
    }
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(_) => f.write_str("AccessKey::Static(<redacted>)"),
            Self::Env(var) => write!(f, "AccessKey::Env({var})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_key_wins_over_environment() {
        let config = Config {
            access_key: Some(" secret ".into()),
            ..Config::default()
        };
        assert_eq!(AccessKey::from_config(&config), AccessKey::Static("secret".into()));
    }

    #[test]
    fn blank_configured_key_falls_back_to_environment() {
        let config = Config {
            access_key: Some("  ".into()),
            access_key_env: "SOME_VAR".into(),
            ..Config::default()
        };
        assert_eq!(AccessKey::from_config(&config), AccessKey::Env("SOME_VAR".into()));
    }

    #[test]
    fn debug_output_redacts_static_keys() {
        let rendered = format!("{:?}", AccessKey::Static("topsecret".into()));
        assert!(!rendered.contains("topsecret"));
    }
}
