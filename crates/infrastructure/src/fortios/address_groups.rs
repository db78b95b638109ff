use async_trait::async_trait;
use gatewarden_application::ports::AddressGroupRepository;
use gatewarden_domain::{AddressEntry, AddressFamily, ApiResponse, DomainError, Partition};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::client::vdom_query;
use super::{response, FortiOsClient};

const GROUP_PLACEHOLDER: &str = "ip_group_name";
const ADDRESS_PLACEHOLDER: &str = "ip_name";

/// Address groups (`addrgrp`/`addrgrp6`) and address objects over the CMDB API.
pub struct FortiOsAddressGroupRepository {
    client: Arc<FortiOsClient>,
}

impl FortiOsAddressGroupRepository {
    pub fn new(client: Arc<FortiOsClient>) -> Self {
        Self { client }
    }

    fn address_body(entry: &AddressEntry) -> Value {
        match entry.family {
            AddressFamily::IPv4 => json!({ "name": &*entry.name, "subnet": entry.subnet() }),
            AddressFamily::IPv6 => json!({ "name": &*entry.name, "ip6": entry.subnet() }),
        }
    }

    async fn write_members(
        &self,
        method: Method,
        template: &str,
        partition: &Partition,
        group: &str,
        body: Value,
    ) -> Result<ApiResponse, DomainError> {
        let reply = self
            .client
            .request(
                method,
                template,
                &[(GROUP_PLACEHOLDER, group)],
                &vdom_query(partition.vdom()),
                Some(&body),
            )
            .await?;
        let decoded = response::decode(&reply);
        debug!(vdom = %partition, group, status = reply.status, response = ?decoded, "Address group write");
        Ok(decoded)
    }
}

#[async_trait]
impl AddressGroupRepository for FortiOsAddressGroupRepository {
    #[instrument(skip(self))]
    async fn get_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
    ) -> Result<Vec<Arc<str>>, DomainError> {
        let reply = self
            .client
            .request(
                Method::GET,
                self.client.paths().group_for(family),
                &[(GROUP_PLACEHOLDER, group)],
                &vdom_query(partition.vdom()),
                None,
            )
            .await?;

        if reply.status == 404 {
            debug!(vdom = %partition, group, "Address group does not exist yet");
            return Ok(Vec::new());
        }

        let records = response::results(&reply, "Address group read")?;
        Ok(records
            .first()
            .map(|record| response::names(record, "member"))
            .unwrap_or_default())
    }

    #[instrument(skip(self, entry), fields(name = %entry.name))]
    async fn create_address(
        &self,
        partition: &Partition,
        entry: &AddressEntry,
    ) -> Result<(), DomainError> {
        let body = Self::address_body(entry);
        let reply = self
            .client
            .request(
                Method::POST,
                self.client.paths().address_for(entry.family),
                &[],
                &vdom_query(partition.vdom()),
                Some(&body),
            )
            .await?;

        match response::decode(&reply) {
            ApiResponse::Success => Ok(()),
            other => Err(DomainError::MutationFailed(format!(
                "Address {} not created ({:?}, HTTP {})",
                entry.name, other, reply.status
            ))),
        }
    }

    #[instrument(skip(self, members), fields(count = members.len()))]
    async fn add_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        self.write_members(
            Method::POST,
            self.client.paths().group_member_for(family),
            partition,
            group,
            response::name_list(members),
        )
        .await
    }

    #[instrument(skip(self, members), fields(count = members.len()))]
    async fn replace_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        self.write_members(
            Method::PUT,
            self.client.paths().group_for(family),
            partition,
            group,
            json!({ "member": response::name_list(members) }),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_address(
        &self,
        partition: &Partition,
        family: AddressFamily,
        name: &str,
    ) -> Result<(), DomainError> {
        let reply = self
            .client
            .request(
                Method::DELETE,
                self.client.paths().delete_address_for(family),
                &[(ADDRESS_PLACEHOLDER, name)],
                &vdom_query(partition.vdom()),
                None,
            )
            .await?;

        match response::decode(&reply) {
            ApiResponse::Success => Ok(()),
            ApiResponse::NotFound => Err(DomainError::NotFound(format!("Address {}", name))),
            other => Err(DomainError::MutationFailed(format!(
                "Address {} not deleted ({:?}, HTTP {})",
                name, other, reply.status
            ))),
        }
    }
}
