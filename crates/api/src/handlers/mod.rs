pub mod blocking;
pub mod health;

pub use blocking::{block_ip, get_blocked_ips, unblock_ip};
pub use health::{firewall_health, health_check};
