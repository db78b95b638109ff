#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use gatewarden_application::ports::{
    AddressGroupRepository, PolicyRepository, QuarantineGateway, VdomDirectory,
};
use gatewarden_application::services::{AddressSetReader, GroupMutator, TenantScopeResolver};
use gatewarden_domain::{
    AddressEntry, AddressFamily, ApiResponse, BannedIp, BannedIpSet, DomainError,
    FirewallPolicy, Partition, TenantScope, VdomStatus,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

type GroupKey = (String, AddressFamily, String);

// ============================================================================
// In-memory firewall
// ============================================================================

/// Fake appliance implementing every port, keyed by partition label
/// (`"global"` for the default context).
#[derive(Clone, Default)]
pub struct MockFirewall {
    vdoms: Arc<RwLock<Vec<String>>>,
    policies: Arc<RwLock<HashMap<String, Vec<FirewallPolicy>>>>,
    groups: Arc<RwLock<HashMap<GroupKey, Vec<Arc<str>>>>>,
    addresses: Arc<RwLock<HashMap<(String, String), AddressFamily>>>,
    banned: Arc<RwLock<HashMap<String, Vec<BannedIp>>>>,
    failing_writes: Arc<RwLock<HashSet<String>>>,
    failing_deletes: Arc<RwLock<HashSet<String>>>,
    failing_bans: Arc<RwLock<HashSet<String>>>,
    deny_reads: Arc<RwLock<bool>>,
    writes: Arc<RwLock<Vec<String>>>,
}

impl MockFirewall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vdoms(vdoms: &[&str]) -> Self {
        let fw = Self::default();
        *fw.vdoms.try_write().unwrap() = vdoms.iter().map(|v| v.to_string()).collect();
        fw
    }

    /// Registers a policy whose `dstaddr`/`dstaddr6` references `group`.
    pub async fn add_policy(&self, partition: &str, policy: &str, group: &str, family: AddressFamily) {
        let mut entry = FirewallPolicy {
            name: Arc::from(policy),
            ..Default::default()
        };
        match family {
            AddressFamily::IPv4 => entry.dstaddr.push(Arc::from(group)),
            AddressFamily::IPv6 => entry.dstaddr6.push(Arc::from(group)),
        }
        self.policies
            .write()
            .await
            .entry(partition.to_string())
            .or_default()
            .push(entry);
    }

    pub async fn set_members(
        &self,
        partition: &str,
        family: AddressFamily,
        group: &str,
        members: &[&str],
    ) {
        self.groups.write().await.insert(
            (partition.to_string(), family, group.to_string()),
            members.iter().map(|m| Arc::from(*m)).collect(),
        );
    }

    pub async fn members(&self, partition: &str, family: AddressFamily, group: &str) -> Vec<String> {
        self.groups
            .read()
            .await
            .get(&(partition.to_string(), family, group.to_string()))
            .map(|m| m.iter().map(|n| n.to_string()).collect())
            .unwrap_or_default()
    }

    pub async fn add_address(&self, partition: &str, name: &str) {
        let family = if name.contains(':') {
            AddressFamily::IPv6
        } else {
            AddressFamily::IPv4
        };
        self.addresses
            .write()
            .await
            .insert((partition.to_string(), name.to_string()), family);
    }

    pub async fn has_address(&self, partition: &str, name: &str) -> bool {
        self.address_family(partition, name).await.is_some()
    }

    /// Family of the `address`/`address6` collection holding `name`.
    pub async fn address_family(&self, partition: &str, name: &str) -> Option<AddressFamily> {
        self.addresses
            .read()
            .await
            .get(&(partition.to_string(), name.to_string()))
            .copied()
    }

    /// Drops an address object behind the service's back.
    pub async fn remove_address(&self, partition: &str, name: &str) {
        self.addresses
            .write()
            .await
            .remove(&(partition.to_string(), name.to_string()));
    }

    pub async fn ban_seed(&self, partition: &str, ip: &str) {
        self.banned
            .write()
            .await
            .entry(partition.to_string())
            .or_default()
            .push(banned(ip));
    }

    pub async fn banned_in(&self, partition: &str) -> Vec<String> {
        self.banned
            .read()
            .await
            .get(partition)
            .map(|b| b.iter().map(|i| i.ip_address.clone()).collect())
            .unwrap_or_default()
    }

    /// Group writes in `partition` answer with a permission failure.
    pub async fn fail_writes_in(&self, partition: &str) {
        self.failing_writes.write().await.insert(partition.to_string());
    }

    pub async fn fail_delete_of(&self, name: &str) {
        self.failing_deletes.write().await.insert(name.to_string());
    }

    pub async fn fail_bans_in(&self, partition: &str) {
        self.failing_bans.write().await.insert(partition.to_string());
    }

    pub async fn set_deny_reads(&self, deny: bool) {
        *self.deny_reads.write().await = deny;
    }

    /// Partitions that received a group write, in call order.
    pub async fn writes(&self) -> Vec<String> {
        self.writes.read().await.clone()
    }

    async fn write_group(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: Vec<Arc<str>>,
    ) -> ApiResponse {
        let label = partition.label().to_string();
        self.writes.write().await.push(label.clone());
        if self.failing_writes.read().await.contains(&label) {
            return ApiResponse::PermissionDenied;
        }
        self.groups
            .write()
            .await
            .insert((label, family, group.to_string()), members);
        ApiResponse::Success
    }
}

fn banned(ip: &str) -> BannedIp {
    BannedIp {
        ip_address: ip.to_string(),
        source: Some("ips".to_string()),
        created: None,
        expires: None,
    }
}

#[async_trait]
impl VdomDirectory for MockFirewall {
    async fn list_vdoms(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.vdoms.read().await.clone())
    }
}

#[async_trait]
impl PolicyRepository for MockFirewall {
    async fn find_by_name(
        &self,
        partition: &Partition,
        name: &str,
    ) -> Result<Option<FirewallPolicy>, DomainError> {
        Ok(self
            .policies
            .read()
            .await
            .get(partition.label())
            .and_then(|p| p.iter().find(|p| p.name.as_ref() == name).cloned()))
    }

    async fn list(&self, partition: &Partition) -> Result<Vec<FirewallPolicy>, DomainError> {
        if *self.deny_reads.read().await {
            return Err(DomainError::PermissionDenied("policy list".to_string()));
        }
        Ok(self
            .policies
            .read()
            .await
            .get(partition.label())
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl AddressGroupRepository for MockFirewall {
    async fn get_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
    ) -> Result<Vec<Arc<str>>, DomainError> {
        if *self.deny_reads.read().await {
            return Err(DomainError::PermissionDenied(group.to_string()));
        }
        Ok(self
            .groups
            .read()
            .await
            .get(&(partition.label().to_string(), family, group.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_address(
        &self,
        partition: &Partition,
        entry: &AddressEntry,
    ) -> Result<(), DomainError> {
        let key = (partition.label().to_string(), entry.name.to_string());
        let mut addresses = self.addresses.write().await;
        if !addresses.contains_key(&key) {
            addresses.insert(key, entry.family);
            Ok(())
        } else {
            Err(DomainError::MutationFailed(format!(
                "{} already exists",
                entry.name
            )))
        }
    }

    async fn add_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        let mut current = self.get_members(partition, family, group).await?;
        for member in members {
            if !current.contains(member) {
                current.push(member.clone());
            }
        }
        Ok(self.write_group(partition, family, group, current).await)
    }

    async fn replace_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        Ok(self
            .write_group(partition, family, group, members.to_vec())
            .await)
    }

    async fn delete_address(
        &self,
        partition: &Partition,
        family: AddressFamily,
        name: &str,
    ) -> Result<(), DomainError> {
        if self.failing_deletes.read().await.contains(name) {
            return Err(DomainError::MutationFailed(format!("{} is in use", name)));
        }
        let key = (partition.label().to_string(), name.to_string());
        let mut addresses = self.addresses.write().await;
        if addresses.get(&key) == Some(&family) {
            addresses.remove(&key);
            Ok(())
        } else {
            Err(DomainError::NotFound(name.to_string()))
        }
    }
}

#[async_trait]
impl QuarantineGateway for MockFirewall {
    async fn list_banned(&self, scope: &TenantScope) -> Result<Vec<BannedIpSet>, DomainError> {
        if *self.deny_reads.read().await {
            return Err(DomainError::PermissionDenied("banned list".to_string()));
        }
        let banned = self.banned.read().await;
        Ok(scope
            .partitions()
            .into_iter()
            .map(|p| BannedIpSet {
                vdom: p.vdom().map(str::to_string),
                ips: banned.get(p.label()).cloned().unwrap_or_default(),
            })
            .collect())
    }

    async fn ban(
        &self,
        scope: &TenantScope,
        ips: &[Arc<str>],
        _expiry_secs: u64,
    ) -> Result<ApiResponse, DomainError> {
        let failing = self.failing_bans.read().await.clone();
        let mut banned = self.banned.write().await;
        let mut statuses = Vec::new();
        for partition in scope.partitions() {
            let ok = !failing.contains(partition.label());
            if ok {
                let list = banned.entry(partition.label().to_string()).or_default();
                for ip in ips {
                    if !list.iter().any(|b| b.ip_address == ip.as_ref()) {
                        list.push(banned_entry(ip));
                    }
                }
            }
            statuses.push(VdomStatus {
                vdom: partition.vdom().map(str::to_string),
                success: ok,
            });
        }
        Ok(status_response(scope, statuses))
    }

    async fn unban(
        &self,
        scope: &TenantScope,
        ips: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError> {
        let failing = self.failing_bans.read().await.clone();
        let mut banned = self.banned.write().await;
        let mut statuses = Vec::new();
        for partition in scope.partitions() {
            let ok = !failing.contains(partition.label());
            if ok {
                if let Some(list) = banned.get_mut(partition.label()) {
                    list.retain(|b| !ips.iter().any(|ip| ip.as_ref() == b.ip_address));
                }
            }
            statuses.push(VdomStatus {
                vdom: partition.vdom().map(str::to_string),
                success: ok,
            });
        }
        Ok(status_response(scope, statuses))
    }
}

fn banned_entry(ip: &Arc<str>) -> BannedIp {
    banned(ip)
}

fn status_response(scope: &TenantScope, statuses: Vec<VdomStatus>) -> ApiResponse {
    if !scope.is_global() {
        return ApiResponse::PartialSuccess(statuses);
    }
    if statuses.iter().all(|s| s.success) {
        ApiResponse::Success
    } else {
        ApiResponse::PermissionDenied
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub fn resolver(fw: &Arc<MockFirewall>, configured: &[&str]) -> Arc<TenantScopeResolver> {
    Arc::new(TenantScopeResolver::new(
        fw.clone(),
        configured.iter().map(|v| v.to_string()).collect(),
    ))
}

pub fn reader(fw: &Arc<MockFirewall>) -> Arc<AddressSetReader> {
    Arc::new(AddressSetReader::new(fw.clone(), fw.clone()))
}

pub fn mutator(fw: &Arc<MockFirewall>) -> Arc<GroupMutator> {
    Arc::new(GroupMutator::new(fw.clone()))
}

/// `count` distinct IPv4 hosts under 10.1.0.0/16.
pub fn hosts(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("10.1.{}.{}", i / 250, i % 250 + 1))
        .collect()
}
