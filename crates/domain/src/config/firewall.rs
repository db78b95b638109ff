use serde::{Deserialize, Serialize};

/// Connection settings for the firewall appliance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirewallConfig {
    /// Base URL of the appliance, e.g. "https://192.0.2.1"
    #[serde(default)]
    pub address: String,

    /// HTTPS port (default: 443)
    #[serde(default = "default_port")]
    pub port: u16,

    /// REST API token, sent as a bearer token
    #[serde(default)]
    pub api_key: Option<String>,

    /// Verify the appliance certificate (default: true)
    #[serde(default = "default_true")]
    pub verify_ssl: bool,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Partitions used when a request does not name any. Empty means global.
    #[serde(default)]
    pub vdoms: Vec<String>,
}

impl FirewallConfig {
    /// Base URL with scheme and port.
    pub fn base_url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        let with_scheme = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("https://{}", address)
        };

        let host_part = with_scheme
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&with_scheme);
        if host_part.rsplit_once(':').is_some_and(|(_, p)| p.parse::<u16>().is_ok()) {
            with_scheme
        } else {
            format!("{}:{}", with_scheme, self.port)
        }
    }
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            port: default_port(),
            api_key: None,
            verify_ssl: true,
            timeout_secs: default_timeout(),
            vdoms: vec![],
        }
    }
}

fn default_port() -> u16 {
    443
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
