//! Claim configuration sub-merger.

use crate::application::Application;
use crate::error::{PatchBlock, ValidationError};
use crate::patch::assign::{assign_if_present, set_if_present};
use crate::patch::merger::UpdateFunction;
use crate::patch::request::ClaimConfigurationPatch;
use std::collections::HashSet;

pub struct ClaimConfigurationMerger;

impl ClaimConfigurationMerger {
    fn validate(patch: &ClaimConfigurationPatch) -> Result<(), ValidationError> {
        let invalid = |reason: String| ValidationError::new(PatchBlock::ClaimConfiguration, reason);

        if let Some(uri) = patch.subject.as_ref().and_then(|s| s.claim_uri.as_deref()) {
            if uri.trim().is_empty() {
                return Err(invalid("subject claim URI must not be blank".to_string()));
            }
        }
        if let Some(uri) = patch.role.as_ref().and_then(|r| r.claim_uri.as_deref()) {
            if uri.trim().is_empty() {
                return Err(invalid("role claim URI must not be blank".to_string()));
            }
        }
        if let Some(claims) = &patch.requested_claims {
            let mut seen = HashSet::new();
            for claim in claims {
                if claim.claim_uri.trim().is_empty() {
                    return Err(invalid("requested claim URI must not be blank".to_string()));
                }
                if !seen.insert(claim.claim_uri.as_str()) {
                    return Err(invalid(format!(
                        "claim '{}' is requested more than once",
                        claim.claim_uri
                    )));
                }
            }
        }
        Ok(())
    }
}

impl UpdateFunction<Application, ClaimConfigurationPatch> for ClaimConfigurationMerger {
    fn apply(
        &self,
        app: &mut Application,
        patch: &ClaimConfigurationPatch,
    ) -> Result<(), ValidationError> {
        Self::validate(patch)?;

        let claims = &mut app.claim_configuration;
        assign_if_present(&mut claims.dialect, patch.dialect.as_ref());

        if let Some(subject) = &patch.subject {
            set_if_present(subject.claim_uri.clone(), |v| claims.subject.claim_uri = Some(v));
            assign_if_present(
                &mut claims.subject.include_user_domain,
                subject.include_user_domain.as_ref(),
            );
            assign_if_present(
                &mut claims.subject.include_tenant_domain,
                subject.include_tenant_domain.as_ref(),
            );
            assign_if_present(
                &mut claims.subject.use_mapped_local_subject,
                subject.use_mapped_local_subject.as_ref(),
            );
        }

        if let Some(role) = &patch.role {
            set_if_present(role.claim_uri.clone(), |v| claims.role.claim_uri = Some(v));
            assign_if_present(
                &mut claims.role.include_user_domain,
                role.include_user_domain.as_ref(),
            );
        }

        assign_if_present(&mut claims.requested_claims, patch.requested_claims.as_ref());
        Ok(())
    }
}
