use crate::{AddressFamily, DomainError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Snapshot of an address group's membership in one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressGroup {
    pub name: Arc<str>,
    pub family: AddressFamily,
    pub members: Vec<Arc<str>>,
}

impl AddressGroup {
    pub fn new(name: Arc<str>, family: AddressFamily, members: Vec<Arc<str>>) -> Self {
        Self {
            name,
            family,
            members,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m.as_ref() == member)
    }

    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Address group name cannot be empty".to_string(),
            ));
        }
        // FortiOS limits object names to 79 characters.
        if name.len() > 79 {
            return Err(DomainError::Validation(
                "Address group name cannot exceed 79 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hard upper bound on the number of members an address group may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GroupCapacity(usize);

impl GroupCapacity {
    pub const DEFAULT: GroupCapacity = GroupCapacity(100);

    pub fn new(limit: usize) -> Result<Self, DomainError> {
        if limit == 0 {
            return Err(DomainError::Validation(
                "Address group capacity must be a positive integer".to_string(),
            ));
        }
        Ok(Self(limit))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for GroupCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GroupCapacity {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupCapacity> for usize {
    fn from(value: GroupCapacity) -> Self {
        value.0
    }
}
