//! Process configuration, read from the environment (and `.env` via dotenvy).

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result, bail};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Provider credential. Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: ApiKey,
    /// Base URL of the OpenAI-compatible API, without the `/chat/completions` suffix.
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Config pointing at `api_base` with every other field at its default.
    pub fn new(api_key: ApiKey, api_base: impl Into<String>) -> Self {
        Self {
            api_key,
            api_base: api_base.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = match var("OPENAI_API_KEY") {
            Some(key) => ApiKey::new(key.trim()),
            None => bail!("OPENAI_API_KEY environment variable is required"),
        };

        let mut config = Self::new(
            api_key,
            var("OPENAI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        );

        if let Some(model) = var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Some(max_tokens) = var("OPENAI_MAX_TOKENS") {
            config.max_tokens = max_tokens
                .parse()
                .with_context(|| format!("OPENAI_MAX_TOKENS is not a number: {max_tokens}"))?;
        }
        if let Some(host) = var("HOST") {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: {host}"))?;
        }
        if let Some(port) = var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}
