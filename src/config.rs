use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// Port the probe target listens on. Fixed: orchestrator manifests point here.
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,webapp=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // `::` with IPV6_V6ONLY off accepts IPv4 and IPv6 clients alike
            host: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// The listen address is not configurable. Only the log filter is taken
    /// from `RUST_LOG`, which may also come from a `.env` file.
    #[must_use]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Self {
            log_filter: env::var("RUST_LOG")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
