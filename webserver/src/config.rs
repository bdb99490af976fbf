//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use shared::{HttpEndpoint, SharedResult};

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_STATIC_DIR: &str = "./public";
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_CONVERSION_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1000);

/// Artificial latencies applied by the slow-backend handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before the conversion fragment is returned
    pub conversion: Duration,
    /// Delay before search results are rendered (skipped for empty terms)
    pub search: Duration,
}

impl LatencyProfile {
    /// No artificial delay at all
    pub fn none() -> Self {
        Self {
            conversion: Duration::ZERO,
            search: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            conversion: DEFAULT_CONVERSION_DELAY,
            search: DEFAULT_SEARCH_DELAY,
        }
    }
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub users_endpoint: HttpEndpoint,
    pub latency: LatencyProfile,
}

impl ServerConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn with_users_endpoint(mut self, raw: &str) -> SharedResult<Self> {
        self.users_endpoint = HttpEndpoint::parse(raw)?;
        Ok(self)
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            users_endpoint: HttpEndpoint::parse(DEFAULT_USERS_ENDPOINT)
                .unwrap_or_else(|e| unreachable!("built-in endpoint is valid: {e}")),
            latency: LatencyProfile::default(),
        }
    }
}
