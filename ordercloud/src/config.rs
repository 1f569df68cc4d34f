//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default API host.
pub const DEFAULT_BASE_API_URL: &str = "https://api.ordercloud.io";
/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_BASE_API_URL: &str = "ORDERCLOUD_BASE_API_URL";
pub const ENV_API_VERSION: &str = "ORDERCLOUD_API_VERSION";
pub const ENV_TIMEOUT_MS: &str = "ORDERCLOUD_TIMEOUT_MS";
pub const ENV_CLIENT_ID: &str = "ORDERCLOUD_CLIENT_ID";
pub const ENV_ACCESS_TOKEN: &str = "ORDERCLOUD_ACCESS_TOKEN";
pub const ENV_IMPERSONATION_TOKEN: &str = "ORDERCLOUD_IMPERSONATION_TOKEN";

/// Connection settings for an OrderCloud client.
///
/// Requests go to `{base_api_url}/{api_version}{path}`. The base URL is
/// validated when the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub base_api_url: String,
    pub api_version: String,
    pub timeout: Duration,
    /// Informational only; token acquisition is handled outside this crate.
    pub client_id: Option<String>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client_id: None,
        }
    }
}

impl SdkConfig {
    /// Reads configuration from `ORDERCLOUD_*` environment variables,
    /// falling back to defaults for anything unset.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL or timeout cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BASE_API_URL).filter(|v| !v.trim().is_empty()) {
            parse_base_url(raw.trim())?;
            config.base_api_url = raw.trim().to_string();
        }
        if let Some(version) = lookup(ENV_API_VERSION).filter(|v| !v.trim().is_empty()) {
            config.api_version = version.trim().trim_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config.timeout = Duration::from_millis(millis);
        }
        config.client_id = lookup(ENV_CLIENT_ID).filter(|v| !v.is_empty());

        Ok(config)
    }
}

/// Parses and checks a base URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase {
            url: raw.to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = SdkConfig::default();
        assert_eq!(config.base_api_url, "https://api.ordercloud.io");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.client_id, None);
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = SdkConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SdkConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SdkConfig::from_lookup(lookup(&[
            (ENV_BASE_API_URL, "https://sandboxapi.ordercloud.io"),
            (ENV_API_VERSION, "/v2/"),
            (ENV_TIMEOUT_MS, "1500"),
            (ENV_CLIENT_ID, "client-123"),
        ]))
        .unwrap();

        assert_eq!(config.base_api_url, "https://sandboxapi.ordercloud.io");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.client_id.as_deref(), Some("client-123"));
    }

    #[test]
    fn rejects_bad_values() {
        let err = SdkConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { value } if value == "soon"));

        let err = SdkConfig::from_lookup(lookup(&[(ENV_BASE_API_URL, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));

        let err = parse_base_url("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::CannotBeABase { .. }));
    }
}
