use async_trait::async_trait;
use gatewarden_application::ports::VdomDirectory;
use gatewarden_domain::DomainError;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{response, FortiOsClient};

pub struct FortiOsVdomDirectory {
    client: Arc<FortiOsClient>,
}

impl FortiOsVdomDirectory {
    pub fn new(client: Arc<FortiOsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VdomDirectory for FortiOsVdomDirectory {
    #[instrument(skip(self))]
    async fn list_vdoms(&self) -> Result<Vec<String>, DomainError> {
        let reply = self
            .client
            .request(Method::GET, &self.client.paths().vdom_list, &[], &[], None)
            .await?;

        let vdoms: Vec<String> = response::results(&reply, "VDOM list")?
            .iter()
            .filter_map(|v| v.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        debug!(count = vdoms.len(), "VDOMs listed");
        Ok(vdoms)
    }
}
