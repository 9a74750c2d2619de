//! Client configuration.
//!
//! The language picks which Codeforces host answers, and with it the locale
//! of names and comments in responses. Everything else tunes the HTTP layer.
//! A config is consumed when a client is built and never changes afterwards.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ApiError;

/// Default maximum accepted response body, large enough for the full
/// `user.ratedList`.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 128 * 1024 * 1024;

/// Environment variable selecting the language (`en` or `ru`).
pub const LANG_ENV: &str = "CODEFORCES_LANG";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CODEFORCES_API_URL";

/// Interface language of the remote service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// API root for this language, with a trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Language::En => "http://codeforces.com/api/",
            Language::Ru => "http://codeforces.ru/api/",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(ApiError::InvalidConfig(format!(
                "unknown language {other:?}, expected \"en\" or \"ru\""
            ))),
        }
    }
}

/// Configuration for `CodeforcesApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Selects the default host.
    pub language: Language,

    /// Replaces the language's host entirely when set.
    pub base_url: Option<String>,

    /// Overall per-request timeout. `None` leaves the HTTP library's default.
    pub timeout: Option<Duration>,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Responses larger than this are rejected while reading the body.
    pub max_body_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            base_url: None,
            timeout: None,
            user_agent: format!("codeforces-api/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ClientConfig {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Builds a configuration from `CODEFORCES_LANG` and `CODEFORCES_API_URL`.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `CODEFORCES_LANG` is set to an unknown value.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Ok(lang) = std::env::var(LANG_ENV) {
            config.language = lang.parse()?;
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = Some(url);
            }
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// The effective API root, always ending in `/`.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{url}/"),
            None => self.language.base_url().to_string(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), ApiError> {
        let base = self.base_url();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {base:?}"
            )));
        }
        url::Url::parse(&base)
            .map_err(|e| ApiError::InvalidConfig(format!("base_url {base:?}: {e}")))?;

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::InvalidConfig(
                "user_agent cannot be empty".to_string(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ApiError::InvalidConfig(
                "max_body_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
