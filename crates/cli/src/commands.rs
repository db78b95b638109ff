use clap::Args;
use gatewarden_api::dto::{BlockIpRequest, BlockedIpsParams, IpInput, UnblockIpRequest};
use gatewarden_domain::BlockMethod;
use serde::Serialize;
use tracing::info;

use crate::di::UseCases;

/// Options shared by every block method.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// `quarantine` or `policy`; defaults to `blocking.default_method`
    #[arg(short, long)]
    pub method: Option<String>,

    /// Address group holding the blocked IPs (policy method)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Firewall policy referencing the group (policy method)
    #[arg(short, long)]
    pub policy: Option<String>,

    /// `ipv4` or `ipv6`
    #[arg(long)]
    pub ip_type: Option<String>,

    /// Comma separated VDOMs, or `global`
    #[arg(long)]
    pub vdom: Option<String>,
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// IPs or CIDR blocks, comma or space separated
    #[arg(required = true)]
    pub ips: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Ban duration label for the quarantine method, e.g. "1 Hour"
    #[arg(long)]
    pub ttl: Option<String>,

    /// Seconds, with `--ttl "Custom Time"`
    #[arg(long)]
    pub duration: Option<u64>,

    /// The group was just created and is attached with member-add calls
    #[arg(long)]
    pub new_group: bool,
}

#[derive(Args, Debug)]
pub struct UnblockArgs {
    #[arg(required = true)]
    pub ips: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args, Debug)]
pub struct BlockedArgs {
    #[arg(short, long)]
    pub method: Option<String>,

    #[arg(short, long)]
    pub policy: Option<String>,

    /// Comma separated address group names
    #[arg(short, long)]
    pub group: Option<String>,

    #[arg(long)]
    pub vdom: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn block(
    use_cases: &UseCases,
    args: BlockArgs,
    default_method: BlockMethod,
) -> anyhow::Result<()> {
    let request = BlockIpRequest {
        method: args.target.method,
        ip_addresses: IpInput::List(args.ips),
        ip_group_name: args.target.group,
        policy_name: args.target.policy,
        ip_type: args.target.ip_type,
        vdom: args.target.vdom,
        time_to_live: args.ttl,
        duration: args.duration,
        is_new_group: args.new_group,
    }
    .into_domain(default_method)?;

    let report = use_cases.block_ip.execute(&request).await?;
    info!(
        newly_blocked = report.newly_blocked.len(),
        errors = report.error_with_block.len(),
        "Block finished"
    );
    print_json(&report)
}

pub async fn unblock(
    use_cases: &UseCases,
    args: UnblockArgs,
    default_method: BlockMethod,
) -> anyhow::Result<()> {
    let request = UnblockIpRequest {
        method: args.target.method,
        ip_addresses: IpInput::List(args.ips),
        ip_group_name: args.target.group,
        policy_name: args.target.policy,
        ip_type: args.target.ip_type,
        vdom: args.target.vdom,
    }
    .into_domain(default_method)?;

    let report = use_cases.unblock_ip.execute(&request).await?;
    info!(
        newly_unblocked = report.newly_unblocked.len(),
        errors = report.error_with_unblock.len(),
        "Unblock finished"
    );
    print_json(&report)
}

pub async fn blocked(
    use_cases: &UseCases,
    args: BlockedArgs,
    default_method: BlockMethod,
) -> anyhow::Result<()> {
    let query = BlockedIpsParams {
        method: args.method,
        policy_name: args.policy,
        ip_group_name: args.group,
        vdom: args.vdom,
    }
    .into_domain(default_method)?;

    print_json(&use_cases.get_blocked_ips.execute(&query).await?)
}

pub async fn health(use_cases: &UseCases) -> anyhow::Result<()> {
    let healthy = use_cases.check_health.execute().await?;
    print_json(&serde_json::json!({ "healthy": healthy }))
}
