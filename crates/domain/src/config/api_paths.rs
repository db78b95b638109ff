use crate::AddressFamily;
use serde::{Deserialize, Serialize};

/// REST path templates of the appliance API.
///
/// `{placeholder}` segments are substituted (percent-encoded) by the
/// transport. Defaults follow FortiOS 6.x/7.x.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiPathsConfig {
    pub vdom_list: String,
    pub policy_list: String,
    pub address: String,
    pub address6: String,
    pub delete_address: String,
    pub delete_address6: String,
    pub address_group: String,
    pub address_group6: String,
    pub address_group_member: String,
    pub address_group_member6: String,
    pub banned_list: String,
    pub ban_ip: String,
    pub unban_ip: String,
}

impl ApiPathsConfig {
    pub fn address_for(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::IPv4 => &self.address,
            AddressFamily::IPv6 => &self.address6,
        }
    }

    pub fn delete_address_for(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::IPv4 => &self.delete_address,
            AddressFamily::IPv6 => &self.delete_address6,
        }
    }

    pub fn group_for(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::IPv4 => &self.address_group,
            AddressFamily::IPv6 => &self.address_group6,
        }
    }

    pub fn group_member_for(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::IPv4 => &self.address_group_member,
            AddressFamily::IPv6 => &self.address_group_member6,
        }
    }

    /// Every template, for validation.
    pub fn all(&self) -> [(&'static str, &str); 13] {
        [
            ("vdom_list", &self.vdom_list),
            ("policy_list", &self.policy_list),
            ("address", &self.address),
            ("address6", &self.address6),
            ("delete_address", &self.delete_address),
            ("delete_address6", &self.delete_address6),
            ("address_group", &self.address_group),
            ("address_group6", &self.address_group6),
            ("address_group_member", &self.address_group_member),
            ("address_group_member6", &self.address_group_member6),
            ("banned_list", &self.banned_list),
            ("ban_ip", &self.ban_ip),
            ("unban_ip", &self.unban_ip),
        ]
    }
}

impl Default for ApiPathsConfig {
    fn default() -> Self {
        Self {
            vdom_list: "/api/v2/cmdb/system/vdom".to_string(),
            policy_list: "/api/v2/cmdb/firewall/policy".to_string(),
            address: "/api/v2/cmdb/firewall/address".to_string(),
            address6: "/api/v2/cmdb/firewall/address6".to_string(),
            delete_address: "/api/v2/cmdb/firewall/address/{ip_name}".to_string(),
            delete_address6: "/api/v2/cmdb/firewall/address6/{ip_name}".to_string(),
            address_group: "/api/v2/cmdb/firewall/addrgrp/{ip_group_name}".to_string(),
            address_group6: "/api/v2/cmdb/firewall/addrgrp6/{ip_group_name}".to_string(),
            address_group_member: "/api/v2/cmdb/firewall/addrgrp/{ip_group_name}/member"
                .to_string(),
            address_group_member6: "/api/v2/cmdb/firewall/addrgrp6/{ip_group_name}/member"
                .to_string(),
            banned_list: "/api/v2/monitor/user/banned/select".to_string(),
            ban_ip: "/api/v2/monitor/user/banned/add_users".to_string(),
            unban_ip: "/api/v2/monitor/user/banned/clear_users".to_string(),
        }
    }
}
