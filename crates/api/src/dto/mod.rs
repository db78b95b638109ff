pub mod blocking;
pub mod health;

pub use blocking::{BlockIpRequest, BlockedIpsParams, IpInput, UnblockIpRequest};
pub use health::{ErrorResponse, HealthResponse};
