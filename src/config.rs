//! Process configuration
//!
//! Configuration is resolved once at startup and passed by reference into the
//! components that need it. Command line values take precedence over
//! environment variables, which take precedence over the defaults below.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Environment variable holding the GitHub bearer credential
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub REST API base URL
pub const API_URL_ENV: &str = "GITHUB_ASSISTANT_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Static bearer credential attached to every upstream call, if present
    pub github_token: Option<String>,
    pub api_base_url: Url,
    /// Upper bound on a single upstream call
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl AssistantConfig {
    /// Builds the configuration from explicit values, falling back to the
    /// environment and then to the defaults for anything left unset.
    pub fn resolve(
        github_token: Option<String>,
        api_base_url: Option<String>,
        request_timeout_secs: Option<u64>,
        bind_addr: Option<String>,
    ) -> Result<Self> {
        let github_token = github_token
            .or_else(|| env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty());

        let api_base_url = api_base_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(&api_base_url)?;

        let request_timeout_secs = request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }
        let request_timeout = Duration::from_secs(request_timeout_secs);

        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind_addr))?;

        Ok(Self {
            github_token,
            api_base_url,
            request_timeout,
            bind_addr,
        })
    }

    /// Configuration taken from the environment alone
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None, None, None)
    }

    /// Configuration pointing at an arbitrary API base URL, used to target stub servers
    pub fn with_api_base_url(api_base_url: &str) -> Result<Self> {
        Ok(Self {
            github_token: None,
            api_base_url: parse_base_url(api_base_url)?,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .context("Invalid default bind address")?,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid GitHub API URL: {}", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("GitHub API URL must use http or https: {}", raw);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            env::remove_var(GITHUB_TOKEN_ENV);
            env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        clear_env();
        let config = AssistantConfig::from_env().unwrap();

        assert_eq!(config.github_token, None);
        assert_eq!(config.api_base_url.as_str(), "https://api.github.com/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    #[serial]
    fn test_environment_fallback() {
        clear_env();
        unsafe {
            env::set_var(GITHUB_TOKEN_ENV, "env-token");
            env::set_var(API_URL_ENV, "http://localhost:9999");
        }

        let config = AssistantConfig::from_env().unwrap();
        assert_eq!(config.github_token.as_deref(), Some("env-token"));
        assert_eq!(config.api_base_url.as_str(), "http://localhost:9999/");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_explicit_values_override_environment() {
        clear_env();
        unsafe {
            env::set_var(GITHUB_TOKEN_ENV, "env-token");
        }

        let config = AssistantConfig::resolve(
            Some("cli-token".to_string()),
            None,
            Some(3),
            Some("0.0.0.0:9000".to_string()),
        )
        .unwrap();
        assert_eq!(config.github_token.as_deref(), Some("cli-token"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr.port(), 9000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_token_is_treated_as_absent() {
        clear_env();
        let config = AssistantConfig::resolve(Some("  ".to_string()), None, None, None).unwrap();
        assert_eq!(config.github_token, None);
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_env();
        assert!(AssistantConfig::resolve(None, Some("not a url".to_string()), None, None).is_err());
        assert!(AssistantConfig::resolve(None, Some("ftp://host".to_string()), None, None).is_err());
        assert!(AssistantConfig::resolve(None, None, None, Some("nowhere".to_string())).is_err());
    }

    #[test]
    #[serial]
    fn test_zero_timeout_is_rejected() {
        clear_env();
        let error = AssistantConfig::resolve(None, None, Some(0), None).unwrap_err();
        assert!(error.to_string().contains("at least 1 second"), "{error}");

        let config = AssistantConfig::resolve(None, None, Some(1), None).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(1));
    }
}
