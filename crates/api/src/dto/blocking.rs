use gatewarden_domain::{
    AddressFamily, BlockMethod, BlockRequest, BlockedIpQuery, DomainError, IpList,
    PolicyBlockRequest, PolicyUnblockRequest, QuarantineBlockRequest, QuarantineUnblockRequest,
    TimeToLive, UnblockRequest, VdomSelection,
};
use serde::Deserialize;
use std::sync::Arc;

/// IPs as either `"10.0.0.1, 10.0.0.2"` or `["10.0.0.1", "10.0.0.2"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IpInput {
    Text(String),
    List(Vec<String>),
}

impl IpInput {
    pub fn parse(&self) -> Result<IpList, DomainError> {
        match self {
            IpInput::Text(raw) => IpList::parse(raw),
            IpInput::List(items) => IpList::from_items(items),
        }
    }
}

/// Request DTO for blocking IPs
#[derive(Debug, Clone, Deserialize)]
pub struct BlockIpRequest {
    pub method: Option<String>,
    pub ip_addresses: IpInput,
    pub ip_group_name: Option<String>,
    pub policy_name: Option<String>,
    pub ip_type: Option<String>,
    pub vdom: Option<String>,
    pub time_to_live: Option<String>,
    /// Seconds, for `time_to_live = "Custom Time"`
    pub duration: Option<u64>,
    #[serde(default)]
    pub is_new_group: bool,
}

/// Request DTO for unblocking IPs
#[derive(Debug, Clone, Deserialize)]
pub struct UnblockIpRequest {
    pub method: Option<String>,
    pub ip_addresses: IpInput,
    pub ip_group_name: Option<String>,
    pub policy_name: Option<String>,
    pub ip_type: Option<String>,
    pub vdom: Option<String>,
}

/// Query parameters of `GET /api/blocked`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockedIpsParams {
    pub method: Option<String>,
    pub policy_name: Option<String>,
    /// Comma separated group names
    pub ip_group_name: Option<String>,
    pub vdom: Option<String>,
}

fn method_or(raw: Option<&str>, default: BlockMethod) -> Result<BlockMethod, DomainError> {
    raw.map(str::parse::<BlockMethod>)
        .transpose()
        .map(|m| m.unwrap_or(default))
}

fn family(raw: Option<&str>) -> Result<AddressFamily, DomainError> {
    raw.map(str::parse::<AddressFamily>)
        .transpose()
        .map(Option::unwrap_or_default)
}

fn required(value: Option<&String>, field: &str) -> Result<Arc<str>, DomainError> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(Arc::from)
        .ok_or_else(|| {
            DomainError::Validation(format!("{} is required for policy based blocking", field))
        })
}

impl BlockIpRequest {
    pub fn into_domain(self, default_method: BlockMethod) -> Result<BlockRequest, DomainError> {
        let ips = self.ip_addresses.parse()?;
        let vdom = VdomSelection::from_param(self.vdom.as_deref());

        match method_or(self.method.as_deref(), default_method)? {
            BlockMethod::Quarantine => {
                let ttl = match self.time_to_live.as_deref() {
                    Some(label) => TimeToLive::parse(label, self.duration)?,
                    None => TimeToLive::default(),
                };
                Ok(BlockRequest::Quarantine(QuarantineBlockRequest { ips, vdom, ttl }))
            }
            BlockMethod::Policy => Ok(BlockRequest::Policy(PolicyBlockRequest {
                ips,
                group_name: required(self.ip_group_name.as_ref(), "ip_group_name")?,
                policy_name: required(self.policy_name.as_ref(), "policy_name")?,
                family: family(self.ip_type.as_deref())?,
                vdom,
                is_new_group: self.is_new_group,
            })),
        }
    }
}

impl UnblockIpRequest {
    pub fn into_domain(self, default_method: BlockMethod) -> Result<UnblockRequest, DomainError> {
        let ips = self.ip_addresses.parse()?;
        let vdom = VdomSelection::from_param(self.vdom.as_deref());

        match method_or(self.method.as_deref(), default_method)? {
            BlockMethod::Quarantine => Ok(UnblockRequest::Quarantine(QuarantineUnblockRequest {
                ips,
                vdom,
            })),
            BlockMethod::Policy => Ok(UnblockRequest::Policy(PolicyUnblockRequest {
                ips,
                group_name: required(self.ip_group_name.as_ref(), "ip_group_name")?,
                policy_name: required(self.policy_name.as_ref(), "policy_name")?,
                family: family(self.ip_type.as_deref())?,
                vdom,
            })),
        }
    }
}

impl BlockedIpsParams {
    pub fn into_domain(self, default_method: BlockMethod) -> Result<BlockedIpQuery, DomainError> {
        let vdom = VdomSelection::from_param(self.vdom.as_deref());

        match method_or(self.method.as_deref(), default_method)? {
            BlockMethod::Quarantine => Ok(BlockedIpQuery::Quarantine { vdom }),
            BlockMethod::Policy => Ok(BlockedIpQuery::Policy {
                policy_name: required(self.policy_name.as_ref(), "policy_name")?,
                group_names: self
                    .ip_group_name
                    .as_deref()
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(Arc::from)
                    .collect(),
                vdom,
            }),
        }
    }
}
