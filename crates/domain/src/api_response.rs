/// Outcome reported by the appliance for one partition of a multi-VDOM call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdomStatus {
    pub vdom: Option<String>,
    pub success: bool,
}

/// Write/read outcome, decoded once at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Success,
    /// The appliance answered with one status per partition.
    PartialSuccess(Vec<VdomStatus>),
    PermissionDenied,
    NotFound,
}

impl ApiResponse {
    /// True only when every partition that answered succeeded.
    pub fn is_success(&self) -> bool {
        match self {
            ApiResponse::Success => true,
            ApiResponse::PartialSuccess(statuses) => {
                !statuses.is_empty() && statuses.iter().all(|s| s.success)
            }
            ApiResponse::PermissionDenied | ApiResponse::NotFound => false,
        }
    }
}
