use gatewarden_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        firewall = %config.firewall.base_url(),
        vdoms = ?config.firewall.vdoms,
        default_method = ?config.blocking.default_method,
        "Configuration loaded"
    );

    Ok(config)
}
