//! Command line and environment settings, plus tracing setup.

use crate::config::DEFAULT_CONFIG_PATH;
use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "unrelated-ads-mcp", version, about = "Multi-tenant Google Ads MCP service")]
pub struct Args {
    /// Client configuration file (JSON, or YAML by `.yaml`/`.yml` extension).
    #[arg(long, env = "CLIENT_CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Fail startup instead of serving zero clients when the config cannot be loaded.
    #[arg(long, env = "CLIENT_CONFIG_STRICT")]
    pub strict_config: bool,

    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Tracing filter directive, e.g. `info` or `unrelated_ads_mcp=debug,tower_http=info`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is already installed.
pub fn init_tracing(log_level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("invalid log filter '{log_level}'"))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "unrelated-ads-mcp",
            "--config",
            "/etc/ads/clients.yaml",
            "--port",
            "9100",
            "--host",
            "127.0.0.1",
            "--strict-config",
            "--log-format",
            "json",
        ])
        .expect("parse");
        assert_eq!(args.config, PathBuf::from("/etc/ads/clients.yaml"));
        assert_eq!(args.bind_addr(), "127.0.0.1:9100".parse().expect("addr"));
        assert!(args.strict_config);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Args::try_parse_from(["unrelated-ads-mcp", "--port", "http"]).is_err());
    }
}
