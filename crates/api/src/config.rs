//! Process configuration, read from environment variables.

use std::net::SocketAddr;

use anyhow::Context;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "CAMPUSTRADE_BIND_ADDR";

/// Listen address when [`BIND_ADDR_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| {
            tracing::debug!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });

        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a valid socket address: {raw:?}"))?;

        Ok(Self { bind_addr })
    }
}
