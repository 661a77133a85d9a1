//! Sign-in endpoint configuration.
//!
//! The endpoint is injected into the form controller instead of living in the
//! submit logic. Browser builds read optional overrides at compile time:
//!
//! - `SIGNIN_API_BASE_URL`: default `http://localhost:3001`
//! - `SIGNIN_API_PATH`: default `/SignInUser`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SIGN_IN_PATH: &str = "/SignInUser";

/// Errors for endpoint overrides that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,

    #[error("unsupported base URL scheme: {0} (expected http:// or https://)")]
    UnsupportedScheme(String),

    #[error("endpoint path is empty")]
    EmptyPath,
}

/// Base URL + path of the remote sign-in resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), path: DEFAULT_SIGN_IN_PATH.to_owned() }
    }
}

impl EndpointConfig {
    /// Build a normalized endpoint.
    ///
    /// Trailing `/` is stripped from `base_url`; `path` gains a leading `/`
    /// when it lacks one.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty base URL, a non-HTTP scheme, or
    /// an empty path.
    pub fn new(base_url: &str, path: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url.to_owned()));
        }

        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Err(ConfigError::EmptyPath);
        }
        let path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };

        Ok(Self { base_url: base_url.to_owned(), path })
    }

    /// Endpoint from compile-time overrides, falling back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("SIGNIN_API_BASE_URL"), option_env!("SIGNIN_API_PATH"))
    }

    fn from_overrides(base_url: Option<&str>, path: Option<&str>) -> Self {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let path = path.unwrap_or(DEFAULT_SIGN_IN_PATH);
        match Self::new(base_url, path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring sign-in endpoint override: {e}");
                Self::default()
            }
        }
    }

    /// Full request URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}
