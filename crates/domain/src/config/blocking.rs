use crate::{BlockMethod, GroupCapacity};
use serde::{Deserialize, Serialize};

/// IP blocking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Method used when a request does not name one (default: policy)
    #[serde(default)]
    pub default_method: BlockMethod,

    /// Maximum number of members of a blocklist address group (default: 100).
    /// The real limit depends on the appliance model and firmware.
    #[serde(default)]
    pub max_group_size: GroupCapacity,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            default_method: BlockMethod::default(),
            max_group_size: GroupCapacity::default(),
        }
    }
}
