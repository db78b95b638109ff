//! Gatewarden Domain Layer
pub mod address;
pub mod address_group;
pub mod api_response;
pub mod block_request;
pub mod config;
pub mod errors;
pub mod policy;
pub mod reconcile;
pub mod report;
pub mod tenant;

pub use address::{AddressEntry, AddressFamily, IpList};
pub use address_group::{AddressGroup, GroupCapacity};
pub use api_response::{ApiResponse, VdomStatus};
pub use block_request::{
    BlockMethod, BlockRequest, BlockedIpQuery, PolicyBlockRequest, PolicyUnblockRequest,
    QuarantineBlockRequest, QuarantineUnblockRequest, TimeToLive, UnblockRequest,
};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use policy::FirewallPolicy;
pub use reconcile::{admit, survivors, Admission, BlockPlan, Classification, UnblockPlan};
pub use report::{
    BannedIp, BannedIpSet, BlockReport, BlockedIpListing, ErrorEntry, GroupMembers,
    PolicyGroupListing, PolicyListing, QuarantineListing, UnblockReport,
};
pub use tenant::{Partition, ScopeResolution, TenantScope, VdomSelection};
