use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gatewarden_application::ports::QuarantineGateway;
use gatewarden_domain::{ApiResponse, BannedIp, BannedIpSet, DomainError, TenantScope};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::client::vdom_query;
use super::{response, FortiOsClient};

/// The `user/banned` monitor API.
///
/// Multi-VDOM calls pass every partition in one comma separated `vdom`
/// parameter; the appliance answers with one record per partition.
pub struct FortiOsQuarantineGateway {
    client: Arc<FortiOsClient>,
}

impl FortiOsQuarantineGateway {
    pub fn new(client: Arc<FortiOsClient>) -> Self {
        Self { client }
    }

    async fn post(
        &self,
        template: &str,
        scope: &TenantScope,
        body: Value,
    ) -> Result<ApiResponse, DomainError> {
        let query = vdom_query(scope.query_value().as_deref());
        let reply = self
            .client
            .request(Method::POST, template, &[], &query, Some(&body))
            .await?;
        Ok(response::decode(&reply))
    }
}

fn timestamp(record: &Value, field: &str) -> Option<DateTime<Utc>> {
    record
        .get(field)
        .and_then(Value::as_i64)
        .filter(|secs| *secs > 0)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

fn to_banned_ip(record: &Value) -> Option<BannedIp> {
    Some(BannedIp {
        ip_address: record.get("ip_address").and_then(Value::as_str)?.to_string(),
        source: record
            .get("source")
            .and_then(Value::as_str)
            .map(str::to_string),
        created: timestamp(record, "created"),
        expires: timestamp(record, "expires"),
    })
}

/// Splits a ban list reply into one set per partition.
pub(crate) fn to_banned_sets(
    body: &Value,
    scope: &TenantScope,
) -> Result<Vec<BannedIpSet>, DomainError> {
    let records: Vec<&Value> = match body {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let single_vdom = match scope.vdoms() {
        [only] => Some(only.to_string()),
        _ => None,
    };

    records
        .into_iter()
        .map(|record| {
            let Some(results) = record.get("results").and_then(Value::as_array) else {
                return Err(DomainError::PermissionDenied(
                    "Banned IP list returned no results".to_string(),
                ));
            };
            Ok(BannedIpSet {
                vdom: record
                    .get("vdom")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .or_else(|| single_vdom.clone()),
                ips: results.iter().filter_map(to_banned_ip).collect(),
            })
        })
        .collect()
}

#[async_trait]
impl QuarantineGateway for FortiOsQuarantineGateway {
    #[instrument(skip(self))]
    async fn list_banned(&self, scope: &TenantScope) -> Result<Vec<BannedIpSet>, DomainError> {
        let query = vdom_query(scope.query_value().as_deref());
        let reply = self
            .client
            .request(Method::GET, &self.client.paths().banned_list, &[], &query, None)
            .await?;

        if matches!(reply.status, 401 | 403) {
            return Err(response::read_error(&reply, "Banned IP list"));
        }

        let sets = to_banned_sets(&reply.body, scope).inspect_err(|e| {
            error!(error = %e, status = reply.status, "Unable to read banned IP list");
        })?;
        debug!(sets = sets.len(), "Banned IP list read");
        Ok(sets)
    }

    #[instrument(skip(self, ips), fields(count = ips.len()))]
    async fn ban(
        &self,
        scope: &TenantScope,
        ips: &[Arc<str>],
        expiry_secs: u64,
    ) -> Result<ApiResponse, DomainError> {
        let body = json!({
            "ip_addresses": ips.iter().map(|ip| &**ip).collect::<Vec<&str>>(),
            "expiry": expiry_secs,
            "src": "ips",
        });
        self.post(&self.client.paths().ban_ip, scope, body).await
    }

    #[instrument(skip(self, ips), fields(count = ips.len()))]
    async fn unban(
        &self,
        scope: &TenantScope,
        ips: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        let body = json!({
            "ip_addresses": ips.iter().map(|ip| &**ip).collect::<Vec<&str>>(),
        });
        self.post(&self.client.paths().unban_ip, scope, body).await
    }
}
