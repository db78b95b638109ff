use gatewarden_application::ports::{
    AddressGroupRepository, PolicyRepository, QuarantineGateway, VdomDirectory,
};
use gatewarden_domain::Config;
use gatewarden_infrastructure::fortios::{
    FortiOsAddressGroupRepository, FortiOsClient, FortiOsPolicyRepository,
    FortiOsQuarantineGateway, FortiOsVdomDirectory,
};
use std::sync::Arc;
use tracing::info;

pub struct Repositories {
    pub vdoms: Arc<dyn VdomDirectory>,
    pub policies: Arc<dyn PolicyRepository>,
    pub groups: Arc<dyn AddressGroupRepository>,
    pub quarantine: Arc<dyn QuarantineGateway>,
}

impl Repositories {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(FortiOsClient::new(
            &config.firewall,
            config.api_paths.clone(),
        )?);

        info!(
            firewall = %config.firewall.base_url(),
            verify_ssl = config.firewall.verify_ssl,
            "FortiOS client initialized"
        );

        Ok(Self {
            vdoms: Arc::new(FortiOsVdomDirectory::new(client.clone())),
            policies: Arc::new(FortiOsPolicyRepository::new(client.clone())),
            groups: Arc::new(FortiOsAddressGroupRepository::new(client.clone())),
            quarantine: Arc::new(FortiOsQuarantineGateway::new(client)),
        })
    }
}
