pub mod blocking;
pub mod health;

// Re-export use cases
pub use blocking::{
    BlockIpUseCase, GetBlockedIpsUseCase, PolicyBlockIpUseCase, PolicyUnblockIpUseCase,
    QuarantineBlockIpUseCase, QuarantineUnblockIpUseCase, UnblockIpUseCase,
};
pub use health::CheckHealthUseCase;
