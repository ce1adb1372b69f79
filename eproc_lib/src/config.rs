//! Crawler configuration, built in code or read from `EPROC_*` variables.

use std::path::PathBuf;
use std::time::Duration;

use eproc_api::AuthConfig;

use crate::error::EprocError;

pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1000);

/// How a multi-lawsuit crawl reacts to failures and how fast it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlPolicy {
    /// Log and drop a failing lawsuit instead of aborting the crawl.
    pub skip_on_error: bool,
    /// Wait after every lawsuit, plus once more after a skipped one.
    pub pause: Duration,
}

impl Default for CrawlPolicy {
    fn default() -> Self {
        Self {
            skip_on_error: true,
            pause: DEFAULT_PAUSE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub auth: AuthConfig,
    pub policy: CrawlPolicy,
}

impl CrawlerConfig {
    pub fn new(certificate_path: impl Into<PathBuf>, passphrase: impl Into<String>) -> Self {
        Self {
            auth: AuthConfig::new(certificate_path, passphrase),
            policy: CrawlPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CrawlPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reads `EPROC_CERT_PATH` and `EPROC_CERT_PASSWORD` (both required) plus
    /// the optional `EPROC_USER_AGENT`, `EPROC_BASE_URL`, `EPROC_TIMEOUT_SECS`,
    /// `EPROC_SKIP_ON_ERROR` and `EPROC_PAUSE_MS`.
    pub fn from_env() -> Result<Self, EprocError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EprocError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| EprocError::Config(format!("{} is not set", key)))
        };

        let mut config = Self::new(required("EPROC_CERT_PATH")?, required("EPROC_CERT_PASSWORD")?);

        if let Some(user_agent) = lookup("EPROC_USER_AGENT").filter(|v| !v.is_empty()) {
            config.auth = config.auth.with_user_agent(&user_agent);
        }
        if let Some(base_url) = lookup("EPROC_BASE_URL").filter(|v| !v.is_empty()) {
            config.auth = config.auth.with_base_url(&base_url);
        }
        if let Some(secs) = parse_u64(&lookup, "EPROC_TIMEOUT_SECS")? {
            config.auth = config.auth.with_timeout(Duration::from_secs(secs));
        }
        if let Some(skip) = parse_bool(&lookup, "EPROC_SKIP_ON_ERROR")? {
            config.policy.skip_on_error = skip;
        }
        if let Some(ms) = parse_u64(&lookup, "EPROC_PAUSE_MS")? {
            config.policy.pause = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, EprocError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| EprocError::Config(format!("{} must be a whole number, got \"{}\"", key, raw)))
}

fn parse_bool<F>(lookup: &F, key: &str) -> Result<Option<bool>, EprocError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(EprocError::Config(format!("{} must be a boolean, got \"{}\"", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_required_only() {
        let config = CrawlerConfig::from_lookup(lookup(&[
            ("EPROC_CERT_PATH", "/certs/a1.pfx"),
            ("EPROC_CERT_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.auth.certificate_path, PathBuf::from("/certs/a1.pfx"));
        assert_eq!(config.auth.passphrase, "secret");
        assert_eq!(config.auth.base_url, eproc_api::portal::DEFAULT_BASE_URL);
        assert_eq!(config.auth.timeout, eproc_api::auth::DEFAULT_TIMEOUT);
        assert_eq!(config.policy, CrawlPolicy::default());
        assert!(config.policy.skip_on_error);
        assert_eq!(config.policy.pause, Duration::from_millis(1000));
    }

    #[test]
    fn test_optional_overrides() {
        let config = CrawlerConfig::from_lookup(lookup(&[
            ("EPROC_CERT_PATH", "a.pfx"),
            ("EPROC_CERT_PASSWORD", "x"),
            ("EPROC_USER_AGENT", "eproc-test"),
            ("EPROC_BASE_URL", "http://127.0.0.1:9000"),
            ("EPROC_TIMEOUT_SECS", "5"),
            ("EPROC_SKIP_ON_ERROR", "false"),
            ("EPROC_PAUSE_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.auth.user_agent, "eproc-test");
        assert_eq!(config.auth.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.auth.timeout, Duration::from_secs(5));
        assert!(!config.policy.skip_on_error);
        assert_eq!(config.policy.pause, Duration::ZERO);
    }

    #[test]
    fn test_missing_password_is_config_error() {
        let err = CrawlerConfig::from_lookup(lookup(&[("EPROC_CERT_PATH", "a.pfx")])).unwrap_err();
        assert!(matches!(err, EprocError::Config(msg) if msg.contains("EPROC_CERT_PASSWORD")));
    }

    #[test]
    fn test_malformed_numbers_and_flags_rejected() {
        let base = [("EPROC_CERT_PATH", "a.pfx"), ("EPROC_CERT_PASSWORD", "x")];

        let mut vars = base.to_vec();
        vars.push(("EPROC_PAUSE_MS", "soon"));
        assert!(CrawlerConfig::from_lookup(lookup(&vars)).is_err());

        let mut vars = base.to_vec();
        vars.push(("EPROC_SKIP_ON_ERROR", "maybe"));
        assert!(CrawlerConfig::from_lookup(lookup(&vars)).is_err());
    }
}
