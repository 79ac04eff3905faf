use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};
use coinfolio_core::refresh::{RefreshOptions, DEFAULT_KLINE_INTERVAL, DEFAULT_KLINE_LIMIT};
use coinfolio_market_data::DEFAULT_BASE_URL;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30000;
/// Largest window the klines endpoint serves.
const MAX_KLINE_LIMIT: u16 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub binance_base_url: String,
    pub refresh_interval: Duration,
    pub kline_interval: String,
    pub kline_limit: u16,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("CF_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid CF_LISTEN_ADDR")?;
        let binance_base_url = lookup("CF_BINANCE_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let refresh_interval_ms: u64 = parse_or_default(
            &lookup,
            "CF_REFRESH_INTERVAL_MS",
            DEFAULT_REFRESH_INTERVAL_MS,
        );
        if refresh_interval_ms == 0 {
            bail!("CF_REFRESH_INTERVAL_MS must be greater than zero");
        }

        let kline_interval = lookup("CF_KLINE_INTERVAL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_KLINE_INTERVAL.to_string());
        let mut kline_limit: u16 = parse_or_default(&lookup, "CF_KLINE_LIMIT", DEFAULT_KLINE_LIMIT);
        if kline_limit == 0 || kline_limit > MAX_KLINE_LIMIT {
            tracing::warn!(
                "CF_KLINE_LIMIT must be between 1 and {}, using {}",
                MAX_KLINE_LIMIT,
                DEFAULT_KLINE_LIMIT
            );
            kline_limit = DEFAULT_KLINE_LIMIT;
        }

        let cors_allow = lookup("CF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let mut timeout_ms: u64 = parse_or_default(
            &lookup,
            "CF_REQUEST_TIMEOUT_MS",
            DEFAULT_REQUEST_TIMEOUT_MS,
        );
        if timeout_ms == 0 {
            tracing::warn!(
                "CF_REQUEST_TIMEOUT_MS must be greater than zero, using {}",
                DEFAULT_REQUEST_TIMEOUT_MS
            );
            timeout_ms = DEFAULT_REQUEST_TIMEOUT_MS;
        }

        Ok(Self {
            listen_addr,
            binance_base_url,
            refresh_interval: Duration::from_millis(refresh_interval_ms),
            kline_interval,
            kline_limit,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn refresh_options(&self) -> RefreshOptions {
        RefreshOptions {
            kline_interval: self.kline_interval.clone(),
            kline_limit: self.kline_limit,
        }
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {} value '{}', using {}", key, raw, default);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.binance_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.refresh_interval, Duration::from_millis(5000));
        assert_eq!(config.kline_interval, "1d");
        assert_eq!(config.kline_limit, 7);
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CF_LISTEN_ADDR", "127.0.0.1:9000"),
            ("CF_BINANCE_BASE_URL", "http://localhost:8081/"),
            ("CF_REFRESH_INTERVAL_MS", "10000"),
            ("CF_KLINE_INTERVAL", "4h"),
            ("CF_KLINE_LIMIT", "42"),
            ("CF_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.binance_base_url, "http://localhost:8081");
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
        assert_eq!(
            config.refresh_options(),
            RefreshOptions {
                kline_interval: "4h".to_string(),
                kline_limit: 42,
            }
        );
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("CF_REFRESH_INTERVAL_MS", "soon"),
            ("CF_KLINE_LIMIT", "0"),
            ("CF_REQUEST_TIMEOUT_MS", "-1"),
        ])
        .unwrap();

        assert_eq!(config.refresh_interval, Duration::from_millis(5000));
        assert_eq!(config.kline_limit, 7);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_request_timeout_falls_back_to_default() {
        let config = config_from(&[("CF_REQUEST_TIMEOUT_MS", "0")]).unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(30000));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(config_from(&[("CF_REFRESH_INTERVAL_MS", "0")]).is_err());
    }

    #[test]
    fn test_invalid_listen_addr_is_rejected() {
        assert!(config_from(&[("CF_LISTEN_ADDR", "not-an-addr")]).is_err());
    }
}
