//! Provisioning configuration sub-merger.

use crate::application::Application;
use crate::error::{PatchBlock, ValidationError};
use crate::patch::assign::{assign_if_present, set_if_present};
use crate::patch::merger::UpdateFunction;
use crate::patch::request::ProvisioningConfigurationPatch;
use std::collections::HashSet;

pub struct ProvisioningConfigurationMerger;

impl UpdateFunction<Application, ProvisioningConfigurationPatch>
    for ProvisioningConfigurationMerger
{
    fn apply(
        &self,
        app: &mut Application,
        patch: &ProvisioningConfigurationPatch,
    ) -> Result<(), ValidationError> {
        if let Some(idps) = &patch.outbound_provisioning_idps {
            let mut seen = HashSet::new();
            for idp in idps {
                if idp.idp.trim().is_empty() || idp.connector.trim().is_empty() {
                    return Err(ValidationError::new(
                        PatchBlock::ProvisioningConfiguration,
                        "outbound provisioning idp and connector must not be blank",
                    ));
                }
                if !seen.insert(idp.idp.as_str()) {
                    return Err(ValidationError::new(
                        PatchBlock::ProvisioningConfiguration,
                        format!("identity provider '{}' is configured more than once", idp.idp),
                    ));
                }
            }
        }

        let provisioning = &mut app.provisioning_configurations;
        if let Some(inbound) = &patch.inbound_provisioning {
            assign_if_present(
                &mut provisioning.inbound_provisioning.proxy_mode,
                inbound.proxy_mode.as_ref(),
            );
            set_if_present(inbound.provisioning_userstore_domain.clone(), |v| {
                provisioning.inbound_provisioning.provisioning_userstore_domain = Some(v)
            });
        }
        assign_if_present(
            &mut provisioning.outbound_provisioning_idps,
            patch.outbound_provisioning_idps.as_ref(),
        );
        Ok(())
    }
}
