//! pixgrid: a terminal gallery for the Unsplash photo API.
//!
//! pixgrid provides:
//! - Keyword search with page-at-a-time "load more" pagination
//! - One-click category filters mapped to search terms
//! - A short list of recent searches, fuzzy-searchable
//! - A latest-photos feed when no search term is set
//! - Race-free fetching: superseded requests are aborted and their late
//!   results discarded

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs): stdin commands, ANSI rendering   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session (session.rs)                               │  ← Action execution
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Query state, result store, search history        │
//! │  - Reactive trigger and stale-response filtering    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ API Layer     │
//! │ (ui/)         │   │ (worker/)     │   │ (api/)        │
//! │ - Rendering   │   │ - tokio tasks │   │ - Endpoints   │
//! │ - Theming     │   │ - Cancellation│   │ - HTTP client │
//! │ - Input       │   │ - Responses   │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths, access key (infrastructure/)     │
//! │  - Images, categories, errors (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to a local file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Gallery state machine with event/action model
//! - [`api`]: Unsplash endpoints, transport trait and response decoding
//! - [`domain`]: Images, pages, filter categories and errors
//! - [`infrastructure`]: Platform paths and access key resolution
//! - [`session`]: State machine wired to a running fetch worker
//! - [`worker`]: Background fetch execution and cancellation
//! - [`ui`]: Terminal rendering, themes and command parsing
//! - [`observability`]: OpenTelemetry tracing to a rotating file
//!
//! # Configuration
//!
//! Read from `$PIXGRID_CONFIG` or `<config_dir>/pixgrid/config.toml`:
//!
//! ```toml
//! access_key_env = "UNSPLASH_ACCESS_KEY"
//! page_size = 12
//! default_term = "nature"
//! history_capacity = 5
//! theme = "midnight"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixgrid::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SetSearchTerm("mountains".to_string()))?;
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch)?;
//! assert_eq!(actions.len(), 1);
//! assert_eq!(state.history.entries(), ["mountains"]);
//! # Ok::<(), pixgrid::GalleryError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod session;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{FetchError, FilterCategory, GalleryError, Image, ImagePage, Result};
pub use session::{Dispatch, GallerySession};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";
const DEFAULT_ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";
const DEFAULT_PAGE_SIZE: u32 = 12;
const DEFAULT_TERM: &str = "nature";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Gallery configuration.
///
/// Every field has a default; settings maps and files only override what they
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the photo API. Default: `https://api.unsplash.com`
    pub api_base_url: String,

    /// Access key given directly. Takes precedence over `access_key_env`.
    pub access_key: Option<String>,

    /// Environment variable holding the access key, read on every request.
    /// Default: `UNSPLASH_ACCESS_KEY`
    pub access_key_env: String,

    /// Images per page. Default: 12
    pub page_size: u32,

    /// Term loaded on start and searched by the `All` filter. Default: `nature`
    pub default_term: String,

    /// Recent searches kept. Default: 5
    pub history_capacity: usize,

    /// Whole-request timeout. Default: 10
    pub request_timeout_secs: u64,

    /// Built-in theme name (`midnight`, `daylight`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directives, e.g. `"debug"` or `"pixgrid=trace"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_key: None,
            access_key_env: DEFAULT_ACCESS_KEY_ENV.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_term: DEFAULT_TERM.to_string(),
            history_capacity: app::DEFAULT_HISTORY_CAPACITY,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from string settings.
    ///
    /// # Parsing Rules
    ///
    /// - Unknown keys are ignored
    /// - Blank values count as unset
    /// - Numbers that fail to parse, and zero sizes, fall back to defaults
    /// - The built-in theme is named by the `theme` key
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pixgrid::Config;
    ///
    /// let mut settings = BTreeMap::new();
    /// settings.insert("page_size".to_string(), "30".to_string());
    /// settings.insert("history_capacity".to_string(), "zero".to_string());
    /// settings.insert("theme".to_string(), "daylight".to_string());
    ///
    /// let config = Config::from_settings(&settings);
    /// assert_eq!(config.page_size, 30);
    /// assert_eq!(config.history_capacity, 5);
    /// assert_eq!(config.theme_name.as_deref(), Some("daylight"));
    /// ```
    #[must_use]
    pub fn from_settings(settings: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            settings
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let positive = |key: &str| text(key).and_then(|value| value.parse::<u64>().ok()).filter(|n| *n > 0);

        Self {
            api_base_url: text("api_base_url").unwrap_or(defaults.api_base_url),
            access_key: text("access_key"),
            access_key_env: text("access_key_env").unwrap_or(defaults.access_key_env),
            page_size: positive("page_size")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(defaults.page_size),
            default_term: settings
                .get("default_term")
                .map_or(defaults.default_term, |term| term.trim().to_string()),
            history_capacity: positive("history_capacity")
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.history_capacity),
            request_timeout_secs: positive("request_timeout_secs").unwrap_or(defaults.request_timeout_secs),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Reads a flat TOML table and applies it with [`Config::from_settings`].
    ///
    /// Scalar values are stringified; nested tables and arrays are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the file cannot be read or is not
    /// valid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("failed to read {}: {e}", path.display())))?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e| GalleryError::Config(format!("failed to parse {}: {e}", path.display())))?;

        let settings = table
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    other => {
                        tracing::debug!(key = %key, kind = other.type_str(), "ignoring non-scalar setting");
                        return None;
                    }
                };
                Some((key, value))
            })
            .collect();

        Ok(Self::from_settings(&settings))
    }

    /// Loads the configuration file if there is one, else the defaults.
    ///
    /// A missing file at the default location is not an error; a missing file
    /// named explicitly by `$PIXGRID_CONFIG` is.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] for unreadable or invalid files.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(infrastructure::paths::CONFIG_PATH_ENV).is_some_and(|v| !v.is_empty());

        match infrastructure::paths::config_file_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            Some(path) if explicit => Err(GalleryError::Config(format!(
                "configuration file {} does not exist",
                path.display()
            ))),
            _ => Ok(Self::default()),
        }
    }
}

/// Resolves the configured theme and creates the initial state.
///
/// A theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing pixgrid");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}
