use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One entry of an error bucket.
///
/// Single-partition requests report bare IPs; multi-partition requests
/// report which partition failed together with the IPs it held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Ip(String),
    Partition {
        name: String,
        ip_addresses: Vec<String>,
    },
}

impl ErrorEntry {
    pub fn partition(name: impl Into<String>, ips: &[Arc<str>]) -> Self {
        ErrorEntry::Partition {
            name: name.into(),
            ip_addresses: ips.iter().map(|ip| ip.to_string()).collect(),
        }
    }

    /// IPs this entry accounts for.
    pub fn ips(&self) -> Vec<&str> {
        match self {
            ErrorEntry::Ip(ip) => vec![ip.as_str()],
            ErrorEntry::Partition { ip_addresses, .. } => {
                ip_addresses.iter().map(String::as_str).collect()
            }
        }
    }
}

fn push_unique(bucket: &mut Vec<String>, ips: &[Arc<str>]) {
    for ip in ips {
        if !bucket.iter().any(|b| b.as_str() == ip.as_ref()) {
            bucket.push(ip.to_string());
        }
    }
}

/// Result of a block request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockReport {
    pub already_blocked: Vec<String>,
    pub newly_blocked: Vec<String>,
    pub error_with_block: Vec<ErrorEntry>,
    pub vdom_not_exist: Vec<String>,
}

impl BlockReport {
    pub fn with_missing_vdoms(vdom_not_exist: Vec<String>) -> Self {
        Self {
            vdom_not_exist,
            ..Self::default()
        }
    }

    pub fn add_already_blocked(&mut self, ips: &[Arc<str>]) {
        push_unique(&mut self.already_blocked, ips);
    }

    pub fn add_newly_blocked(&mut self, ips: &[Arc<str>]) {
        push_unique(&mut self.newly_blocked, ips);
    }

    /// Records failed IPs, flat or as a partition record depending on `partition`.
    pub fn add_errors(&mut self, partition: Option<&str>, ips: &[Arc<str>]) {
        if ips.is_empty() {
            return;
        }
        match partition {
            Some(name) => self.error_with_block.push(ErrorEntry::partition(name, ips)),
            None => self
                .error_with_block
                .extend(ips.iter().map(|ip| ErrorEntry::Ip(ip.to_string()))),
        }
    }

    /// Every IP mentioned in any error entry.
    pub fn error_ips(&self) -> Vec<&str> {
        self.error_with_block.iter().flat_map(|e| e.ips()).collect()
    }
}

/// Result of an unblock request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnblockReport {
    pub not_exist: Vec<String>,
    pub newly_unblocked: Vec<String>,
    pub error_with_unblock: Vec<ErrorEntry>,
    pub vdom_not_exist: Vec<String>,
    /// Address objects left behind after a successful unblock.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cleanup_failed: Vec<String>,
}

impl UnblockReport {
    pub fn with_missing_vdoms(vdom_not_exist: Vec<String>) -> Self {
        Self {
            vdom_not_exist,
            ..Self::default()
        }
    }

    pub fn add_not_exist(&mut self, ips: &[Arc<str>]) {
        push_unique(&mut self.not_exist, ips);
    }

    pub fn add_newly_unblocked(&mut self, ips: &[Arc<str>]) {
        push_unique(&mut self.newly_unblocked, ips);
    }

    pub fn add_errors(&mut self, partition: Option<&str>, ips: &[Arc<str>]) {
        if ips.is_empty() {
            return;
        }
        match partition {
            Some(name) => self
                .error_with_unblock
                .push(ErrorEntry::partition(name, ips)),
            None => self
                .error_with_unblock
                .extend(ips.iter().map(|ip| ErrorEntry::Ip(ip.to_string()))),
        }
    }

    pub fn error_ips(&self) -> Vec<&str> {
        self.error_with_unblock.iter().flat_map(|e| e.ips()).collect()
    }
}

/// One entry of the appliance-native ban list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedIp {
    pub ip_address: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// `None` means the ban never expires.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

/// Ban list contents of one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedIpSet {
    pub vdom: Option<String>,
    pub ips: Vec<BannedIp>,
}

impl BannedIpSet {
    pub fn contains(&self, ip: &str) -> bool {
        self.ips.iter().any(|b| b.ip_address == ip)
    }
}

/// Listing returned for the quarantine method.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuarantineListing {
    pub result: Vec<BannedIpSet>,
    pub vdom_not_exist: Vec<String>,
}

/// Members of one requested address group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembers {
    pub name: String,
    pub member: Vec<String>,
}

/// Policy-bound groups and their members in one partition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyGroupListing {
    pub vdom: Option<String>,
    pub policy_name: String,
    pub srcaddr: Vec<String>,
    pub dstaddr: Vec<String>,
    pub srcaddr6: Vec<String>,
    pub dstaddr6: Vec<String>,
    pub addrgrp: Vec<GroupMembers>,
    pub addrgrp_not_exist: Vec<String>,
}

/// Listing returned for the policy method.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyListing {
    pub result: Vec<PolicyGroupListing>,
    pub vdom_not_exist: Vec<String>,
}

/// Either listing shape, depending on the block method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockedIpListing {
    Quarantine(QuarantineListing),
    Policy(PolicyListing),
}
