use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_UPSTREAM_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_NUM: u64 = 5;

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    /// Upstream credential. Without it every search is answered with a config error.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub timeout_ms: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ProxyConfig {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_ms) }

    /// The key, ignoring one set to an empty string.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}
