//! Set reconciliation between a requested IP list and an address group.
//!
//! Everything here is a pure function of the group snapshot and the
//! request; callers re-read the snapshot before every reconciliation.

use crate::{AddressGroup, DomainError, GroupCapacity, Partition};
use std::collections::HashSet;
use std::sync::Arc;

/// Requested IPs split by whether they are already members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub present: Vec<Arc<str>>,
    pub absent: Vec<Arc<str>>,
}

impl Classification {
    /// Both halves keep the request's first-seen order.
    pub fn classify(requested: &[Arc<str>], members: &[Arc<str>]) -> Self {
        let members: HashSet<&str> = members.iter().map(|m| m.as_ref()).collect();
        let mut seen = HashSet::new();
        let mut out = Self::default();

        for ip in requested {
            if !seen.insert(ip.as_ref()) {
                continue;
            }
            if members.contains(ip.as_ref()) {
                out.present.push(ip.clone());
            } else {
                out.absent.push(ip.clone());
            }
        }
        out
    }

    /// Nothing left to add: a block request needs no write.
    pub fn is_satisfied(&self) -> bool {
        self.absent.is_empty()
    }
}

/// Candidates split by what still fits into the group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Admission {
    pub admitted: Vec<Arc<str>>,
    pub overflow: Vec<Arc<str>>,
}

/// Admits the first `capacity - current` candidates.
///
/// A group that is already full (or over the limit because of an external
/// writer) rejects the whole batch instead of admitting nothing silently.
pub fn admit(
    group: &str,
    current: usize,
    capacity: GroupCapacity,
    mut candidates: Vec<Arc<str>>,
) -> Result<Admission, DomainError> {
    let limit = capacity.get();
    if current >= limit {
        return Err(DomainError::GroupCapacityExceeded {
            group: group.to_string(),
            limit,
        });
    }

    let remaining = limit - current;
    let overflow = if candidates.len() > remaining {
        candidates.split_off(remaining)
    } else {
        Vec::new()
    };

    Ok(Admission {
        admitted: candidates,
        overflow,
    })
}

/// Members left after removing `removal`, in member order.
pub fn survivors(members: &[Arc<str>], removal: &[Arc<str>]) -> Vec<Arc<str>> {
    let removal: HashSet<&str> = removal.iter().map(|r| r.as_ref()).collect();
    members
        .iter()
        .filter(|m| !removal.contains(m.as_ref()))
        .cloned()
        .collect()
}

/// Planned block for one partition, computed before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPlan {
    pub partition: Partition,
    pub already_blocked: Vec<Arc<str>>,
    pub admitted: Vec<Arc<str>>,
    pub overflow: Vec<Arc<str>>,
    pub current_members: Vec<Arc<str>>,
}

impl BlockPlan {
    pub fn build(
        partition: Partition,
        group: &AddressGroup,
        requested: &[Arc<str>],
        capacity: GroupCapacity,
    ) -> Result<Self, DomainError> {
        let classification = Classification::classify(requested, &group.members);

        if classification.is_satisfied() {
            return Ok(Self {
                partition,
                already_blocked: classification.present,
                admitted: Vec::new(),
                overflow: Vec::new(),
                current_members: group.members.clone(),
            });
        }

        let admission = admit(&group.name, group.len(), capacity, classification.absent)?;

        Ok(Self {
            partition,
            already_blocked: classification.present,
            admitted: admission.admitted,
            overflow: admission.overflow,
            current_members: group.members.clone(),
        })
    }

    /// Plan for a partition whose group has no room left: members already
    /// present stay reported as blocked, everything else overflows.
    pub fn rejected(partition: Partition, group: &AddressGroup, requested: &[Arc<str>]) -> Self {
        let classification = Classification::classify(requested, &group.members);
        Self {
            partition,
            already_blocked: classification.present,
            admitted: Vec::new(),
            overflow: classification.absent,
            current_members: group.members.clone(),
        }
    }

    pub fn needs_write(&self) -> bool {
        !self.admitted.is_empty()
    }

    /// Full member list to write in replace mode.
    pub fn desired_members(&self) -> Vec<Arc<str>> {
        let mut members = self.current_members.clone();
        members.extend(self.admitted.iter().cloned());
        members
    }
}

/// Planned unblock for one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnblockPlan {
    pub partition: Partition,
    pub removed: Vec<Arc<str>>,
    pub not_exist: Vec<Arc<str>>,
    pub survivors: Vec<Arc<str>>,
}

impl UnblockPlan {
    pub fn build(partition: Partition, group: &AddressGroup, requested: &[Arc<str>]) -> Self {
        let classification = Classification::classify(requested, &group.members);
        let survivors = survivors(&group.members, &classification.present);

        Self {
            partition,
            removed: classification.present,
            not_exist: classification.absent,
            survivors,
        }
    }

    pub fn needs_write(&self) -> bool {
        !self.removed.is_empty()
    }
}
