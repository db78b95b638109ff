//! # Gatewarden
//!
//! Blocks and unblocks IP addresses on FortiGate appliances, either through
//! the quarantine ban list or through address groups referenced by a policy.
//! Runs one-shot commands or serves the same operations over HTTP.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Parser, Subcommand};
use gatewarden_api::AppState;
use gatewarden_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use commands::{BlockArgs, BlockedArgs, UnblockArgs};
use di::{Repositories, UseCases};

#[derive(Parser)]
#[command(name = "gatewarden")]
#[command(version)]
#[command(about = "IP blocking for FortiGate firewalls")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Firewall address, overrides `firewall.address`
    #[arg(short, long, global = true)]
    firewall: Option<String>,

    /// REST API token, overrides `firewall.api_key`
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Comma separated VDOMs, overrides `firewall.vdoms`
    #[arg(long, global = true, value_delimiter = ',')]
    vdoms: Option<Vec<String>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Web server port
        #[arg(short = 'w', long)]
        web_port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },
    /// Block IPs
    Block(BlockArgs),
    /// Unblock IPs
    Unblock(UnblockArgs),
    /// List blocked IPs
    Blocked(BlockedArgs),
    /// Check that the appliance answers for every configured VDOM
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (web_port, bind_address) = match &cli.command {
        Command::Serve { web_port, bind } => (*web_port, bind.clone()),
        _ => (None, None),
    };

    let overrides = CliOverrides {
        firewall_address: cli.firewall,
        api_key: cli.api_key,
        vdoms: cli.vdoms,
        web_port,
        bind_address,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let repos = Repositories::new(&config)?;
    let use_cases = UseCases::new(&repos, &config);
    let default_method = config.blocking.default_method;

    match cli.command {
        Command::Serve { .. } => {
            let bind_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

            let state = AppState {
                block_ip: use_cases.block_ip,
                unblock_ip: use_cases.unblock_ip,
                get_blocked_ips: use_cases.get_blocked_ips,
                check_health: use_cases.check_health,
                default_method,
                api_key: config.server.api_key.as_deref().map(Arc::from),
            };

            info!(
                api = %format!("http://{}/api", bind_addr),
                api_key_required = state.api_key.is_some(),
                "Gatewarden starting"
            );
            server::start_web_server(bind_addr, state).await
        }
        Command::Block(args) => commands::block(&use_cases, args, default_method).await,
        Command::Unblock(args) => commands::unblock(&use_cases, args, default_method).await,
        Command::Blocked(args) => commands::blocked(&use_cases, args, default_method).await,
        Command::Health => commands::health(&use_cases).await,
    }
}
