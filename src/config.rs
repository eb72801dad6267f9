use crate::engine::{TrendWeights, WhaleThresholds};
use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_FEES_API_URL: &str = "https://api.llama.fi/overview/fees?excludeChain=true";
pub const DEFAULT_DEXS_API_URL: &str = "https://api.llama.fi/overview/dexs?excludeChain=true";
pub const DEFAULT_YIELDS_API_URL: &str = "https://yields.llama.fi/pools";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub fees_api_url: String,
    pub dexs_api_url: String,
    pub yields_api_url: String,
    pub fetch_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    /// Present only when host, user, and password are all configured.
    pub mail: Option<MailConfig>,
    /// True in a hosted deployment; hides the local assistant feature.
    pub hosted: bool,
    pub ollama_url: String,
    pub ollama_model: String,
    pub trend: TrendWeights,
    pub whale: WhaleThresholds,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = parse_number::<u16>(&env_map, "PORT", "8080")?;
        let fetch_timeout_secs = parse_number::<u64>(&env_map, "FETCH_TIMEOUT_SECS", "20")?;
        let cache_ttl_secs = parse_number::<u64>(&env_map, "CACHE_TTL_SECS", "3600")?;

        let fees_api_url = env_map
            .get("FEES_API_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_FEES_API_URL.to_string());
        let dexs_api_url = env_map
            .get("DEXS_API_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DEXS_API_URL.to_string());
        let yields_api_url = env_map
            .get("YIELDS_API_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_YIELDS_API_URL.to_string());

        // Mail is opt-in: all three of host/user/password or nothing.
        let mail = match (
            env_map.get("SMTP_HOST"),
            env_map.get("SMTP_USER"),
            env_map.get("SMTP_PASSWORD"),
        ) {
            (Some(host), Some(user), Some(password)) => Some(MailConfig {
                host: host.clone(),
                user: user.clone(),
                password: password.clone(),
                port: parse_number::<u16>(&env_map, "SMTP_PORT", "587")?,
            }),
            _ => None,
        };

        let hosted = env_map.contains_key("HOSTED");

        let ollama_url = env_map
            .get("OLLAMA_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:11434".to_string());
        let ollama_model = env_map
            .get("OLLAMA_MODEL")
            .cloned()
            .unwrap_or_else(|| "llama3".to_string());

        Ok(Config {
            port,
            fees_api_url,
            dexs_api_url,
            yields_api_url,
            fetch_timeout_secs,
            cache_ttl_secs,
            mail,
            hosted,
            ollama_url,
            ollama_model,
            trend: TrendWeights::default(),
            whale: WhaleThresholds::default(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    env_map: &HashMap<String, String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError> {
    env_map
        .get(key)
        .map(|s| s.as_str())
        .unwrap_or(default)
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue(key.to_string(), "must be a number".to_string()))
}
