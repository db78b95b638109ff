pub mod address_groups;
pub mod client;
pub mod policies;
pub mod quarantine;
pub mod response;
pub mod vdoms;

pub use address_groups::FortiOsAddressGroupRepository;
pub use client::{FortiOsClient, HttpReply};
pub use policies::FortiOsPolicyRepository;
pub use quarantine::FortiOsQuarantineGateway;
pub use vdoms::FortiOsVdomDirectory;
