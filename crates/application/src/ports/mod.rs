mod address_group_repository;
mod policy_repository;
mod quarantine_gateway;
mod vdom_directory;

pub use address_group_repository::AddressGroupRepository;
pub use policy_repository::PolicyRepository;
pub use quarantine_gateway::QuarantineGateway;
pub use vdom_directory::VdomDirectory;
