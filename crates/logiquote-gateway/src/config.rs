//! Gateway configuration

use std::net::SocketAddr;
use std::str::FromStr;

use logiquote_common::{QuoteError, Result};
use logiquote_pricing::QuoteSettings;
use serde::{Deserialize, Serialize};

/// Gateway service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Quote defaults
    pub pricing: QuoteSettings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: crate::DEFAULT_PORT,
            log_json: false,
            pricing: QuoteSettings::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// A value that is present but does not parse is a [`QuoteError::Config`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        // Platform-provided PORT first, LOGIQUOTE_PORT overrides it
        if let Some(port) = parse(&lookup, "PORT")? {
            cfg.port = port;
        }
        if let Some(host) = lookup("LOGIQUOTE_HOST") {
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = parse(&lookup, "LOGIQUOTE_PORT")? {
            cfg.port = port;
        }
        if let Some(log_json) = parse(&lookup, "LOGIQUOTE_LOG_JSON")? {
            cfg.log_json = log_json;
        }

        // Pricing settings
        if let Some(include_vat) = parse(&lookup, "LOGIQUOTE_INCLUDE_VAT")? {
            cfg.pricing.include_vat = include_vat;
        }
        if let Some(strict) = parse(&lookup, "LOGIQUOTE_STRICT_VALIDATION")? {
            cfg.pricing.strict_validation = strict;
        }

        cfg.socket_addr()?;
        Ok(cfg)
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| QuoteError::Config(format!("invalid listen host: {:?}", self.host)))
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| QuoteError::Config(format!("{key} has an unparseable value: {raw:?}")))
}
