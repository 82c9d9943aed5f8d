//! Client configuration options.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{Error, Result};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.alternatives.pe";

/// Directory used for the request journal when none is configured.
pub const DEFAULT_LOG_DIR: &str = "altpe-logs";

const ENV_BASE_URL: &str = "ALTERNATIVES_PE_BASE_URL";
const ENV_CLIENT_ID: &str = "ALTERNATIVES_PE_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "ALTERNATIVES_PE_CLIENT_SECRET";
const ENV_TIMEOUT: &str = "ALTERNATIVES_PE_TIMEOUT";
const ENV_MAX_RETRIES: &str = "ALTERNATIVES_PE_MAX_RETRIES";
const ENV_LOG_REQUESTS: &str = "ALTERNATIVES_PE_LOG_REQUESTS";
const ENV_LOG_DIR: &str = "ALTERNATIVES_PE_LOG_DIR";

/// Configuration for the Alternatives.PE client.
///
/// Values are resolved as explicit argument, then environment variable,
/// then built-in default.
///
/// # Example
///
/// ```
/// use altpe_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_credentials("my-client-id", "my-client-secret")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.client_id, "my-client-id");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.alternatives.pe`
    pub base_url: Url,
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: SecretString,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Retry configuration for [`AltPeClient::with_retry`](crate::AltPeClient::with_retry)
    pub retry: RetryConfig,
    /// Append every request/response pair to a JSONL journal
    pub log_requests: bool,
    /// Directory holding the journal files
    pub log_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: String::new(),
            client_secret: SecretString::from(String::new()),
            timeout: Duration::from_secs(30),
            user_agent: format!("altpe-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            log_requests: false,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

fn default_base_url() -> Url {
    match Url::parse(DEFAULT_BASE_URL) {
        Ok(url) => url,
        Err(_) => unreachable!("DEFAULT_BASE_URL is a valid URL"),
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `ALTERNATIVES_PE_*` environment variables.
    ///
    /// Unset variables fall back to defaults. Malformed values (an
    /// unparsable timeout or base URL) are reported as [`Error::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config = config.with_base_url(&url)?;
        }
        if let Some(id) = get(ENV_CLIENT_ID) {
            config.client_id = id;
        }
        if let Some(secret) = get(ENV_CLIENT_SECRET) {
            config.client_secret = SecretString::from(secret);
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            let secs: f64 = raw
                .parse()
                .map_err(|_| Error::Config(format!("{ENV_TIMEOUT} is not a number: {raw}")))?;
            config.timeout = Duration::try_from_secs_f64(secs)
                .map_err(|_| Error::Config(format!("{ENV_TIMEOUT} out of range: {raw}")))?;
        }
        if let Some(raw) = get(ENV_MAX_RETRIES) {
            config.retry.max_retries = raw
                .parse()
                .map_err(|_| Error::Config(format!("{ENV_MAX_RETRIES} is not an integer: {raw}")))?;
        }
        if let Some(raw) = get(ENV_LOG_REQUESTS) {
            config.log_requests = parse_flag(&raw);
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config.log_dir = expand_home(&dir, lookup("HOME"));
        }

        Ok(config)
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    /// Override the credentials. Empty values leave the current ones in place.
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if !client_id.is_empty() {
            self.client_id = client_id;
        }
        if !client_secret.is_empty() {
            self.client_secret = SecretString::from(client_secret);
        }
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Enable the JSONL request journal under `log_dir`.
    pub fn with_request_logging(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_requests = true;
        self.log_dir = log_dir.into();
        self
    }

    /// Fails with [`Error::Config`] unless both credentials are present.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() || self.client_secret.expose_secret().is_empty() {
            return Err(Error::Config(
                "client_id and client_secret must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn expand_home(dir: &str, home: Option<String>) -> PathBuf {
    match (dir.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => {
            PathBuf::from(home).join(rest.trim_start_matches(['/', '\\']))
        }
        _ => PathBuf::from(dir),
    }
}

/// Backoff policy for [`AltPeClient::with_retry`](crate::AltPeClient::with_retry).
///
/// The request executor never retries on its own; this only drives the
/// opt-in helper.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial backoff duration
    pub initial_backoff: Duration,
    /// Maximum backoff duration
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate the backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        let backoff_millis = (self.initial_backoff.as_millis() as u64).saturating_mul(factor);
        let max_millis = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff_millis.min(max_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_url.as_str(), "https://api.alternatives.pe/");
        assert_eq!(config.retry.max_retries, 3);
        assert!(!config.log_requests);
        assert_eq!(config.log_dir, PathBuf::from("altpe-logs"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ALTERNATIVES_PE_CLIENT_ID", "id-1"),
            ("ALTERNATIVES_PE_CLIENT_SECRET", "secret-1"),
            ("ALTERNATIVES_PE_BASE_URL", "http://localhost:9000"),
            ("ALTERNATIVES_PE_TIMEOUT", "2.5"),
            ("ALTERNATIVES_PE_MAX_RETRIES", "7"),
            ("ALTERNATIVES_PE_LOG_REQUESTS", "TRUE"),
            ("ALTERNATIVES_PE_LOG_DIR", "~/altpe"),
            ("HOME", "/home/tester"),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "id-1");
        assert_eq!(config.client_secret.expose_secret(), "secret-1");
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.retry.max_retries, 7);
        assert!(config.log_requests);
        assert_eq!(config.log_dir, PathBuf::from("/home/tester/altpe"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("ALTERNATIVES_PE_TIMEOUT", "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_explicit_credentials_override_env() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ALTERNATIVES_PE_CLIENT_ID", "env-id"),
            ("ALTERNATIVES_PE_CLIENT_SECRET", "env-secret"),
        ]))
        .unwrap()
        .with_credentials("explicit-id", "");

        assert_eq!(config.client_id, "explicit-id");
        assert_eq!(config.client_secret.expose_secret(), "env-secret");
    }

    #[test]
    fn test_log_flag_parsing() {
        assert!(parse_flag("yes"));
        assert!(parse_flag("On"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_credentials("id", "hunter2");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_retry_backoff() {
        let config = RetryConfig::default();
        assert_eq!(config.backoff_for_attempt(0), Duration::from_millis(500));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_millis(1000));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_retry_backoff_max() {
        let config = RetryConfig::default()
            .with_initial_backoff(Duration::from_secs(10))
            .with_max_backoff(Duration::from_secs(30));

        // 10 * 2^3 = 80, but capped at 30
        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(30));
        assert_eq!(config.backoff_for_attempt(70), Duration::from_secs(30));
    }
}
