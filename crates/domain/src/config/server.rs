use serde::{Deserialize, Serialize};

/// Settings of the HTTP API server
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub web_port: u16,

    pub bind_address: String,

    /// Required in `X-Api-Key` for mutating requests when set.
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: 8080,
            bind_address: "127.0.0.1".to_string(),
            api_key: None,
        }
    }
}
