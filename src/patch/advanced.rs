//! Advanced configuration sub-merger.

use crate::application::{Application, Certificate, CertificateType};
use crate::error::{PatchBlock, ValidationError};
use crate::patch::assign::{assign_if_present, set_if_present};
use crate::patch::merger::UpdateFunction;
use crate::patch::request::{AdvancedConfigurationPatch, CertificatePatch};

pub struct AdvancedConfigurationMerger;

fn validate_certificate(cert: &CertificatePatch) -> Result<(), ValidationError> {
    let value = cert.value.trim();
    if value.is_empty() {
        return Err(ValidationError::new(
            PatchBlock::AdvancedConfiguration,
            "certificate value must not be blank",
        ));
    }
    if cert.kind == CertificateType::Jwks
        && !(value.starts_with("https://") || value.starts_with("http://"))
    {
        return Err(ValidationError::new(
            PatchBlock::AdvancedConfiguration,
            format!("JWKS certificate must be an http(s) URL, got '{}'", value),
        ));
    }
    Ok(())
}

impl UpdateFunction<Application, AdvancedConfigurationPatch> for AdvancedConfigurationMerger {
    fn apply(
        &self,
        app: &mut Application,
        patch: &AdvancedConfigurationPatch,
    ) -> Result<(), ValidationError> {
        if let Some(cert) = &patch.certificate {
            validate_certificate(cert)?;
        }

        let advanced = &mut app.advanced_configurations;
        assign_if_present(&mut advanced.saas, patch.saas.as_ref());
        assign_if_present(
            &mut advanced.discoverable_by_end_users,
            patch.discoverable_by_end_users.as_ref(),
        );
        assign_if_present(&mut advanced.skip_login_consent, patch.skip_login_consent.as_ref());
        assign_if_present(&mut advanced.skip_logout_consent, patch.skip_logout_consent.as_ref());
        assign_if_present(
            &mut advanced.return_authenticated_idp_list,
            patch.return_authenticated_idp_list.as_ref(),
        );
        assign_if_present(
            &mut advanced.enable_authorization,
            patch.enable_authorization.as_ref(),
        );
        set_if_present(patch.certificate.as_ref(), |cert| {
            advanced.certificate = Some(Certificate {
                kind: cert.kind,
                value: cert.value.trim().to_string(),
            });
        });
        Ok(())
    }
}
