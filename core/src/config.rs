//! Client configuration.
//!
//! The API origin is injected into `ClinicClient` at construction instead of
//! living in a module-level constant, so tests can point the client at a
//! mock server bound to a random port.

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "VETCLINIC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the origin from `VETCLINIC_API_URL`, falling back to the default.
    /// Blank values are ignored.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
