use crate::{AddressFamily, DomainError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The address fields of a firewall policy that can reference blocklist groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirewallPolicy {
    pub name: Arc<str>,
    pub srcaddr: Vec<Arc<str>>,
    pub dstaddr: Vec<Arc<str>>,
    pub srcaddr6: Vec<Arc<str>>,
    pub dstaddr6: Vec<Arc<str>>,
}

impl FirewallPolicy {
    /// Address names the policy references for `family`, destination first.
    pub fn addresses(&self, family: AddressFamily) -> impl Iterator<Item = &Arc<str>> {
        let (dst, src) = match family {
            AddressFamily::IPv4 => (&self.dstaddr, &self.srcaddr),
            AddressFamily::IPv6 => (&self.dstaddr6, &self.srcaddr6),
        };
        dst.iter().chain(src.iter())
    }

    pub fn references(&self, group: &str, family: AddressFamily) -> bool {
        self.addresses(family).any(|a| a.as_ref() == group)
    }

    /// Family under which the policy references `group`, IPv4 first.
    pub fn family_of(&self, group: &str) -> Option<AddressFamily> {
        [AddressFamily::IPv4, AddressFamily::IPv6]
            .into_iter()
            .find(|family| self.references(group, *family))
    }

    /// Fails unless `group` is referenced for `family`.
    pub fn ensure_references(&self, group: &str, family: AddressFamily) -> Result<(), DomainError> {
        if self.references(group, family) {
            Ok(())
        } else {
            Err(DomainError::GroupNotInPolicy {
                group: group.to_string(),
                policy: self.name.to_string(),
            })
        }
    }

    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Policy name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
