use gatewarden_domain::{BlockReport, BlockRequest, DomainError, UnblockReport, UnblockRequest};
use std::sync::Arc;

use super::{
    PolicyBlockIpUseCase, PolicyUnblockIpUseCase, QuarantineBlockIpUseCase,
    QuarantineUnblockIpUseCase,
};

/// Routes a block request to the mechanism it names.
pub struct BlockIpUseCase {
    policy: Arc<PolicyBlockIpUseCase>,
    quarantine: Arc<QuarantineBlockIpUseCase>,
}

impl BlockIpUseCase {
    pub fn new(
        policy: Arc<PolicyBlockIpUseCase>,
        quarantine: Arc<QuarantineBlockIpUseCase>,
    ) -> Self {
        Self { policy, quarantine }
    }

    pub async fn execute(&self, request: &BlockRequest) -> Result<BlockReport, DomainError> {
        match request {
            BlockRequest::Policy(req) => self.policy.execute(req).await,
            BlockRequest::Quarantine(req) => self.quarantine.execute(req).await,
        }
    }
}

pub struct UnblockIpUseCase {
    policy: Arc<PolicyUnblockIpUseCase>,
    quarantine: Arc<QuarantineUnblockIpUseCase>,
}

impl UnblockIpUseCase {
    pub fn new(
        policy: Arc<PolicyUnblockIpUseCase>,
        quarantine: Arc<QuarantineUnblockIpUseCase>,
    ) -> Self {
        Self { policy, quarantine }
    }

    pub async fn execute(&self, request: &UnblockRequest) -> Result<UnblockReport, DomainError> {
        match request {
            UnblockRequest::Policy(req) => self.policy.execute(req).await,
            UnblockRequest::Quarantine(req) => self.quarantine.execute(req).await,
        }
    }
}
