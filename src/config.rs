use std::env;
use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub api_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_host: DEFAULT_HOST.to_string(),
            service_port: DEFAULT_PORT,
            api_docs: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let service_port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT must be a valid port number (0-65535), got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let api_docs = match lookup("SERVICE_API_DOCS") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("SERVICE_API_DOCS must be true or false, got '{}'", raw))?,
            None => false,
        };

        Ok(Config {
            service_host,
            service_port,
            api_docs,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        tracing::info!("  API docs: {}", if self.api_docs { "enabled" } else { "disabled" });
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognised flag value '{}'", other)),
    }
}
