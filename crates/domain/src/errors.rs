use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Check VDOM/user or API key permission: {0}")]
    PermissionDenied(String),

    #[error("Maximum {limit} items exceeded for {group} group")]
    GroupCapacityExceeded { group: String, limit: usize },

    #[error("Input policy name not found: {0}")]
    PolicyNotFound(String),

    #[error("IP address group {group} not exist in {policy} policy")]
    GroupNotInPolicy { group: String, policy: String },

    #[error("{ips} not exists in {group} group")]
    NotInGroup { ips: String, group: String },

    #[error("Address group mutation failed: {0}")]
    MutationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid firewall response: {0}")]
    InvalidResponse(String),
}
