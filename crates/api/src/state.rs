use gatewarden_application::use_cases::{
    BlockIpUseCase, CheckHealthUseCase, GetBlockedIpsUseCase, UnblockIpUseCase,
};
use gatewarden_domain::BlockMethod;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub block_ip: Arc<BlockIpUseCase>,
    pub unblock_ip: Arc<UnblockIpUseCase>,
    pub get_blocked_ips: Arc<GetBlockedIpsUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
    /// Used when a request does not name a method
    pub default_method: BlockMethod,
    /// Expected `X-Api-Key` for mutating requests; `None` disables the check
    pub api_key: Option<Arc<str>>,
}
