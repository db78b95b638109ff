use async_trait::async_trait;
use gatewarden_application::ports::PolicyRepository;
use gatewarden_domain::{DomainError, FirewallPolicy, Partition};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::client::vdom_query;
use super::{response, FortiOsClient};

pub struct FortiOsPolicyRepository {
    client: Arc<FortiOsClient>,
}

impl FortiOsPolicyRepository {
    pub fn new(client: Arc<FortiOsClient>) -> Self {
        Self { client }
    }

    fn to_policy(record: &Value) -> Option<FirewallPolicy> {
        let name = record.get("name").and_then(Value::as_str)?;
        Some(FirewallPolicy {
            name: Arc::from(name),
            srcaddr: response::names(record, "srcaddr"),
            dstaddr: response::names(record, "dstaddr"),
            srcaddr6: response::names(record, "srcaddr6"),
            dstaddr6: response::names(record, "dstaddr6"),
        })
    }
}

#[async_trait]
impl PolicyRepository for FortiOsPolicyRepository {
    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        partition: &Partition,
        name: &str,
    ) -> Result<Option<FirewallPolicy>, DomainError> {
        let mut query = vdom_query(partition.vdom());
        query.push(("filter", format!("name=={}", name)));

        let reply = self
            .client
            .request(Method::GET, &self.client.paths().policy_list, &[], &query, None)
            .await?;
        if reply.status == 404 {
            return Ok(None);
        }

        // The filter is a server-side hint; match exactly here.
        let policy = response::results(&reply, "Policy lookup")?
            .iter()
            .filter_map(Self::to_policy)
            .find(|p| p.name.as_ref() == name);

        debug!(vdom = %partition, found = policy.is_some(), "Policy lookup");
        Ok(policy)
    }

    #[instrument(skip(self))]
    async fn list(&self, partition: &Partition) -> Result<Vec<FirewallPolicy>, DomainError> {
        let query = vdom_query(partition.vdom());
        let reply = self
            .client
            .request(Method::GET, &self.client.paths().policy_list, &[], &query, None)
            .await?;

        Ok(response::results(&reply, "Policy list")?
            .iter()
            .filter_map(Self::to_policy)
            .collect())
    }
}
