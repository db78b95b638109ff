use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// What the caller asked for when naming tenant partitions (VDOMs).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VdomSelection {
    /// Use the partitions from the appliance configuration.
    #[default]
    Default,
    /// Explicitly named partitions, in caller order.
    Named(Vec<String>),
    /// Every partition the appliance knows about.
    All,
}

impl VdomSelection {
    /// Builds a selection from a raw parameter: `None`/empty keeps the
    /// configured default, `"*"` or `"all"` selects every partition, anything
    /// else is read as a comma separated list.
    pub fn from_param(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return VdomSelection::Default;
        };
        if raw == "*" || raw.eq_ignore_ascii_case("all") {
            return VdomSelection::All;
        }
        let names: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            VdomSelection::Default
        } else {
            VdomSelection::Named(names)
        }
    }
}

/// A single partition an operation runs in. `Global` sends no `vdom`
/// parameter and lets the appliance pick its default context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition {
    Global,
    Vdom(Arc<str>),
}

impl Partition {
    pub fn vdom(&self) -> Option<&str> {
        match self {
            Partition::Global => None,
            Partition::Vdom(name) => Some(name),
        }
    }

    pub fn label(&self) -> &str {
        self.vdom().unwrap_or("global")
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, deduplicated set of partition names. Empty means global.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TenantScope {
    vdoms: Vec<Arc<str>>,
}

impl TenantScope {
    pub fn global() -> Self {
        Self::default()
    }

    pub fn new<I, S>(vdoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scope = Self::default();
        for vdom in vdoms {
            let vdom = vdom.as_ref().trim();
            if !vdom.is_empty() && !scope.contains(vdom) {
                scope.vdoms.push(Arc::from(vdom));
            }
        }
        scope
    }

    pub fn contains(&self, vdom: &str) -> bool {
        self.vdoms.iter().any(|v| v.as_ref() == vdom)
    }

    pub fn is_global(&self) -> bool {
        self.vdoms.is_empty()
    }

    pub fn vdoms(&self) -> &[Arc<str>] {
        &self.vdoms
    }

    /// True when results have to be reported per partition.
    pub fn is_multi(&self) -> bool {
        self.vdoms.len() > 1
    }

    /// Partitions to iterate over; a global scope yields exactly one.
    pub fn partitions(&self) -> Vec<Partition> {
        if self.vdoms.is_empty() {
            return vec![Partition::Global];
        }
        self.vdoms.iter().cloned().map(Partition::Vdom).collect()
    }

    /// Value for the `vdom` query parameter (comma joined), if any.
    pub fn query_value(&self) -> Option<String> {
        if self.vdoms.is_empty() {
            None
        } else {
            Some(
                self.vdoms
                    .iter()
                    .map(|v| v.as_ref())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        }
    }
}

/// Output of the tenant scope resolver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeResolution {
    pub scope: TenantScope,
    pub not_exist: Vec<String>,
}
