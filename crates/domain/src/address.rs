use crate::DomainError;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Address family of an address object or address group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressFamily {
    #[default]
    #[serde(rename = "IPv4")]
    IPv4,
    #[serde(rename = "IPv6")]
    IPv6,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::IPv4 => "IPv4",
            AddressFamily::IPv6 => "IPv6",
        }
    }

    pub fn of(network: &IpNetwork) -> Self {
        match network {
            IpNetwork::V4(_) => AddressFamily::IPv4,
            IpNetwork::V6(_) => AddressFamily::IPv6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" | "v4" | "4" => Ok(AddressFamily::IPv4),
            "ipv6" | "v6" | "6" => Ok(AddressFamily::IPv6),
            other => Err(DomainError::Validation(format!(
                "Unknown address family '{}', expected IPv4 or IPv6",
                other
            ))),
        }
    }
}

/// A standalone address object as the appliance stores it.
///
/// The blocklist names every object after the IP/CIDR it holds, so `name`
/// doubles as the membership key inside address groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub name: Arc<str>,
    pub network: IpNetwork,
    pub family: AddressFamily,
}

impl AddressEntry {
    pub fn from_ip(ip: &str) -> Result<Self, DomainError> {
        let network = parse_network(ip)?;
        Ok(Self {
            name: Arc::from(ip),
            family: AddressFamily::of(&network),
            network,
        })
    }

    /// Subnet value in the `ip/prefix` form the appliance expects.
    pub fn subnet(&self) -> String {
        format!("{}/{}", self.network.ip(), self.network.prefix())
    }
}

fn parse_network(raw: &str) -> Result<IpNetwork, DomainError> {
    if let Ok(ip) = IpAddr::from_str(raw) {
        return Ok(IpNetwork::from(ip));
    }
    IpNetwork::from_str(raw).map_err(|_| DomainError::InvalidIpAddress(raw.to_string()))
}

/// Caller-supplied IPs after parsing, validation and first-seen deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpList {
    ips: Vec<Arc<str>>,
}

impl IpList {
    /// Parses a comma separated string such as `"10.0.0.1, 10.0.0.2/32"`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::from_items(raw.split(','))
    }

    /// Parses items that may themselves contain comma separated values.
    pub fn from_items<I, S>(items: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ips = Vec::new();

        for item in items {
            for part in item.as_ref().split(',') {
                let ip = part.trim();
                if ip.is_empty() {
                    continue;
                }
                parse_network(ip)?;
                if seen.insert(ip.to_string()) {
                    ips.push(Arc::from(ip));
                }
            }
        }

        if ips.is_empty() {
            return Err(DomainError::Validation(
                "IP address list cannot be empty".to_string(),
            ));
        }

        Ok(Self { ips })
    }

    /// Rejects entries that do not belong to `family`.
    pub fn ensure_family(&self, family: AddressFamily) -> Result<(), DomainError> {
        for ip in &self.ips {
            let network = parse_network(ip)?;
            if AddressFamily::of(&network) != family {
                return Err(DomainError::Validation(format!(
                    "{} is not an {} address",
                    ip, family
                )));
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.ips
    }

    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.ips.iter().map(|ip| ip.to_string()).collect()
    }
}
