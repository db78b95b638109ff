mod block_ip;
mod get_blocked_ips;
mod policy_block_ip;
mod policy_unblock_ip;
mod quarantine_block_ip;
mod quarantine_unblock_ip;

pub use block_ip::{BlockIpUseCase, UnblockIpUseCase};
pub use get_blocked_ips::GetBlockedIpsUseCase;
pub use policy_block_ip::PolicyBlockIpUseCase;
pub use policy_unblock_ip::PolicyUnblockIpUseCase;
pub use quarantine_block_ip::QuarantineBlockIpUseCase;
pub use quarantine_unblock_ip::QuarantineUnblockIpUseCase;
