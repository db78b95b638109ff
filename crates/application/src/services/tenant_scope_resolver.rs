use gatewarden_domain::{DomainError, ScopeResolution, TenantScope, VdomSelection};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::VdomDirectory;

/// Resolves which partitions an operation applies to.
///
/// Missing partitions are reported in `not_exist` rather than failing the
/// request, unless nothing valid is left to act on.
pub struct TenantScopeResolver {
    directory: Arc<dyn VdomDirectory>,
    configured: Vec<String>,
}

impl TenantScopeResolver {
    pub fn new(directory: Arc<dyn VdomDirectory>, configured: Vec<String>) -> Self {
        Self {
            directory,
            configured,
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, selection: &VdomSelection) -> Result<ScopeResolution, DomainError> {
        match selection {
            VdomSelection::Default if self.configured.is_empty() => Ok(ScopeResolution::default()),
            VdomSelection::Default => self.resolve_named(&self.configured).await,
            VdomSelection::Named(names) => self.resolve_named(names).await,
            VdomSelection::All => {
                let known = self.directory.list_vdoms().await?;
                debug!(count = known.len(), "Resolved all partitions");
                Ok(ScopeResolution {
                    scope: TenantScope::new(&known),
                    not_exist: vec![],
                })
            }
        }
    }

    async fn resolve_named(&self, names: &[String]) -> Result<ScopeResolution, DomainError> {
        let known = self.directory.list_vdoms().await?;

        let mut valid = Vec::new();
        let mut not_exist: Vec<String> = Vec::new();
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if known.iter().any(|k| k == name) {
                valid.push(name.to_string());
            } else if !not_exist.iter().any(|n| n == name) {
                not_exist.push(name.to_string());
            }
        }

        if !not_exist.is_empty() {
            warn!(missing = ?not_exist, "Requested VDOMs do not exist on the appliance");
        }

        if valid.is_empty() {
            return Err(DomainError::Validation(format!(
                "None of the requested VDOMs exist: {}",
                not_exist.join(", ")
            )));
        }

        Ok(ScopeResolution {
            scope: TenantScope::new(&valid),
            not_exist,
        })
    }
}
