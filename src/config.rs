use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Process configuration, read once at startup.
///
/// When `webhook_url` is set the bot serves Telegram webhooks on `address`;
/// otherwise it falls back to long polling.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub webhook_url: Option<Url>,
    pub address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = optional("BOT_TOKEN").ok_or(ConfigError::MissingEnvVar("BOT_TOKEN"))?;

        let webhook_url = optional("WEBHOOK_URL")
            .map(|raw| parse_webhook_url(&raw))
            .transpose()?;

        let port = match optional("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                message: format!("{raw:?} is not a port number ({e})"),
            })?,
            None => DEFAULT_PORT,
        };

        let host = match optional("HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| ConfigError::InvalidValue {
                key: "HOST",
                message: format!("{raw:?} is not an IP address ({e})"),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            bot_token,
            webhook_url,
            address: SocketAddr::new(host, port),
        })
    }
}

fn parse_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: "WEBHOOK_URL",
        message: e.to_string(),
    })?;

    if url.scheme() != "https" {
        return Err(ConfigError::InvalidValue {
            key: "WEBHOOK_URL",
            message: "must start with https:// (Telegram only delivers to HTTPS)".to_string(),
        });
    }
    // "/" is the liveness route.
    if url.path() == "/" {
        return Err(ConfigError::InvalidValue {
            key: "WEBHOOK_URL",
            message: "must include a path such as /webhook".to_string(),
        });
    }
    Ok(url)
}
