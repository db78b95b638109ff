use crate::{AddressFamily, DomainError, IpList, VdomSelection};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Mechanism used to block addresses on the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockMethod {
    /// Appliance-native ban list.
    Quarantine,
    /// Address group referenced by a firewall policy.
    #[default]
    Policy,
}

impl FromStr for BlockMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarantine" | "quarantine based" => Ok(BlockMethod::Quarantine),
            "policy" | "policy based" => Ok(BlockMethod::Policy),
            other => Err(DomainError::Validation(format!(
                "Unknown block method '{}'",
                other
            ))),
        }
    }
}

/// How long a quarantine ban lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeToLive {
    FiveMinutes,
    ThirtyMinutes,
    #[default]
    OneHour,
    SixHours,
    TwelveHours,
    OneDay,
    Forever,
    Custom(u64),
}

impl TimeToLive {
    /// Expiry in seconds as the ban API takes it; `0` never expires.
    pub fn expiry_secs(&self) -> u64 {
        match self {
            TimeToLive::FiveMinutes => 300,
            TimeToLive::ThirtyMinutes => 1_800,
            TimeToLive::OneHour => 3_600,
            TimeToLive::SixHours => 21_600,
            TimeToLive::TwelveHours => 43_200,
            TimeToLive::OneDay => 86_400,
            TimeToLive::Forever => 0,
            TimeToLive::Custom(secs) => *secs,
        }
    }

    /// Parses a preset label; `"Custom Time"` takes its value from `duration`.
    pub fn parse(label: &str, duration: Option<u64>) -> Result<Self, DomainError> {
        let ttl = match label.trim().to_ascii_lowercase().as_str() {
            "5 minutes" => TimeToLive::FiveMinutes,
            "30 minutes" => TimeToLive::ThirtyMinutes,
            "1 hour" => TimeToLive::OneHour,
            "6 hours" => TimeToLive::SixHours,
            "12 hours" => TimeToLive::TwelveHours,
            "1 day" => TimeToLive::OneDay,
            "forever" => TimeToLive::Forever,
            "custom time" => match duration {
                Some(secs) => TimeToLive::Custom(secs),
                None => {
                    return Err(DomainError::Validation(
                        "Custom Time requires a duration in seconds".to_string(),
                    ))
                }
            },
            other => {
                return Err(DomainError::Validation(format!(
                    "Unknown time to live '{}'",
                    other
                )))
            }
        };
        Ok(ttl)
    }
}

/// Add IPs to a policy-bound address group.
#[derive(Debug, Clone)]
pub struct PolicyBlockRequest {
    pub ips: IpList,
    pub group_name: Arc<str>,
    pub policy_name: Arc<str>,
    pub family: AddressFamily,
    pub vdom: VdomSelection,
    /// Populate a group for the first time via member-add instead of replace.
    pub is_new_group: bool,
}

/// Remove IPs from a policy-bound address group.
#[derive(Debug, Clone)]
pub struct PolicyUnblockRequest {
    pub ips: IpList,
    pub group_name: Arc<str>,
    pub policy_name: Arc<str>,
    pub family: AddressFamily,
    pub vdom: VdomSelection,
}

#[derive(Debug, Clone)]
pub struct QuarantineBlockRequest {
    pub ips: IpList,
    pub vdom: VdomSelection,
    pub ttl: TimeToLive,
}

#[derive(Debug, Clone)]
pub struct QuarantineUnblockRequest {
    pub ips: IpList,
    pub vdom: VdomSelection,
}

/// A block request for either mechanism.
#[derive(Debug, Clone)]
pub enum BlockRequest {
    Quarantine(QuarantineBlockRequest),
    Policy(PolicyBlockRequest),
}

#[derive(Debug, Clone)]
pub enum UnblockRequest {
    Quarantine(QuarantineUnblockRequest),
    Policy(PolicyUnblockRequest),
}

/// Parameters for listing blocked IPs.
#[derive(Debug, Clone)]
pub enum BlockedIpQuery {
    Quarantine {
        vdom: VdomSelection,
    },
    Policy {
        policy_name: Arc<str>,
        group_names: Vec<Arc<str>>,
        vdom: VdomSelection,
    },
}
