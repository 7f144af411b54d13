use crate::TtlMs;
use tracing::warn;

/// Connection settings for the apifootball.com upstream
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
}

/// Per-resource cache lifetimes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlConfig {
    pub countries: TtlMs,
    pub leagues: TtlMs,
    pub teams: TtlMs,
    pub standings: TtlMs,
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            countries: TtlMs(Config::DEFAULT_COUNTRIES_TTL_MS),
            leagues: TtlMs(Config::DEFAULT_LEAGUES_TTL_MS),
            teams: TtlMs(Config::DEFAULT_TEAMS_TTL_MS),
            standings: TtlMs(Config::DEFAULT_STANDINGS_TTL_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub upstream: UpstreamConfig,
    pub ttl: TtlConfig,
    /// `None` disables the background expiry sweep
    pub sweep_interval_ms: Option<u64>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_HTTP_PORT: u16 = 8080;
    const DEFAULT_BASE_URL: &'static str = "https://apiv3.apifootball.com/";
    const DEFAULT_TIMEOUT_MS: u64 = 10_000;
    const DEFAULT_COUNTRIES_TTL_MS: u64 = 86_400_000; // 24 hours
    const DEFAULT_LEAGUES_TTL_MS: u64 = 3_600_000; // 1 hour
    const DEFAULT_TEAMS_TTL_MS: u64 = 3_600_000; // 1 hour
    const DEFAULT_STANDINGS_TTL_MS: u64 = 300_000; // 5 minutes
    const DEFAULT_SWEEP_INTERVAL_MS: u64 = 600_000; // 10 minutes

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("FOOTBALL_API_KEY").unwrap_or_else(|| {
            warn!("FOOTBALL_API_KEY not set, upstream requests will be rejected");
            String::new()
        });

        let sweep_interval_ms = parse_or(
            &lookup,
            "FOOTBALL_CACHE_SWEEP_INTERVAL_MS",
            Self::DEFAULT_SWEEP_INTERVAL_MS,
        );

        Self {
            host: lookup("FOOTBALL_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            http_port: parse_or(&lookup, "FOOTBALL_HTTP_PORT", Self::DEFAULT_HTTP_PORT),
            upstream: UpstreamConfig {
                base_url: lookup("FOOTBALL_API_BASE_URL")
                    .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
                api_key,
                timeout_ms: parse_or(&lookup, "FOOTBALL_API_TIMEOUT_MS", Self::DEFAULT_TIMEOUT_MS),
            },
            ttl: TtlConfig {
                countries: ttl_or(
                    &lookup,
                    "FOOTBALL_CACHE_TTL_COUNTRIES_MS",
                    Self::DEFAULT_COUNTRIES_TTL_MS,
                ),
                leagues: ttl_or(
                    &lookup,
                    "FOOTBALL_CACHE_TTL_LEAGUES_MS",
                    Self::DEFAULT_LEAGUES_TTL_MS,
                ),
                teams: ttl_or(
                    &lookup,
                    "FOOTBALL_CACHE_TTL_TEAMS_MS",
                    Self::DEFAULT_TEAMS_TTL_MS,
                ),
                standings: ttl_or(
                    &lookup,
                    "FOOTBALL_CACHE_TTL_STANDINGS_MS",
                    Self::DEFAULT_STANDINGS_TTL_MS,
                ),
            },
            sweep_interval_ms: (sweep_interval_ms > 0).then_some(sweep_interval_ms),
            allowed_origins: lookup("FOOTBALL_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        None => default,
    }
}

/// TTL overrides are signed; zero or negative means entries expire on the next read
fn ttl_or<F>(lookup: &F, name: &str, default: u64) -> TtlMs
where
    F: Fn(&str) -> Option<String>,
{
    let ms = parse_or(lookup, name, i64::try_from(default).unwrap_or(i64::MAX));
    TtlMs(u64::try_from(ms).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "https://apiv3.apifootball.com/");
        assert_eq!(config.upstream.timeout_ms, 10_000);
        assert!(config.upstream.api_key.is_empty());
        assert_eq!(config.ttl, TtlConfig::default());
        assert_eq!(config.ttl.countries, TtlMs(86_400_000));
        assert_eq!(config.ttl.standings, TtlMs(300_000));
        assert_eq!(config.sweep_interval_ms, Some(600_000));
        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("FOOTBALL_HTTP_PORT", "9090"),
            ("FOOTBALL_API_KEY", "secret"),
            ("FOOTBALL_CACHE_TTL_TEAMS_MS", "1000"),
            ("FOOTBALL_CACHE_SWEEP_INTERVAL_MS", "0"),
            ("FOOTBALL_ALLOWED_ORIGINS", "http://localhost:3000, http://example.org"),
        ]);

        assert_eq!(config.http_port, 9090);
        assert_eq!(config.upstream.api_key, "secret");
        assert_eq!(config.ttl.teams, TtlMs(1000));
        assert_eq!(config.ttl.leagues, TtlMs(3_600_000));
        assert_eq!(config.sweep_interval_ms, None);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://example.org"]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("FOOTBALL_HTTP_PORT", "not-a-port"),
            ("FOOTBALL_CACHE_TTL_STANDINGS_MS", "five minutes"),
        ]);

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.ttl.standings, TtlMs(300_000));
    }

    #[test]
    fn test_non_positive_ttl_disables_caching() {
        let config = config_from(&[
            ("FOOTBALL_CACHE_TTL_STANDINGS_MS", "-5"),
            ("FOOTBALL_CACHE_TTL_TEAMS_MS", "0"),
        ]);

        assert_eq!(config.ttl.standings, TtlMs(0));
        assert_eq!(config.ttl.teams, TtlMs(0));
        assert_eq!(config.ttl.countries, TtlMs(86_400_000));
    }
}
