use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Script URL for htmx, embedded in the page head.
    pub htmx_src: String,
}

impl Config {
    /// Reads `TODO_BIND_ADDR` and `TODO_HTMX_SRC`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr = lookup("TODO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("TODO_BIND_ADDR is not a socket address: {raw_addr:?}"))?;
        let htmx_src = lookup("TODO_HTMX_SRC")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HTMX_SRC.to_string());
        Ok(Self { bind_addr, htmx_src })
    }
}
