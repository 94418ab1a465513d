//! Application merger: scalar fields, nested blocks, then tags.

use crate::application::Application;
use crate::error::{PatchError, ValidationError};
use crate::patch::advanced::AdvancedConfigurationMerger;
use crate::patch::assign::set_if_present;
use crate::patch::auth_sequence::AuthenticationSequenceMerger;
use crate::patch::claims::ClaimConfigurationMerger;
use crate::patch::provisioning::ProvisioningConfigurationMerger;
use crate::patch::request::{
    AdvancedConfigurationPatch, ApplicationPatch, AuthenticationSequencePatch,
    ClaimConfigurationPatch, ProvisioningConfigurationPatch,
};
use crate::patch::tags::{patch_tags, TagDuplicatePolicy};
use tracing::{debug, warn};

/// Applies one nested patch block onto its target.
///
/// Implementations validate the whole block before mutating, so an `Err`
/// leaves the target untouched. Repeating the same call is idempotent.
pub trait UpdateFunction<T, P>: Send + Sync {
    fn apply(&self, target: &mut T, patch: &P) -> Result<(), ValidationError>;
}

/// Merges an [`ApplicationPatch`] into an [`Application`]
///
/// Sub-mergers are injected at construction; [`ApplicationMerger::new`] wires
/// the built-in ones.
pub struct ApplicationMerger {
    claims: Box<dyn UpdateFunction<Application, ClaimConfigurationPatch>>,
    authentication: Box<dyn UpdateFunction<Application, AuthenticationSequencePatch>>,
    advanced: Box<dyn UpdateFunction<Application, AdvancedConfigurationPatch>>,
    provisioning: Box<dyn UpdateFunction<Application, ProvisioningConfigurationPatch>>,
    tag_policy: TagDuplicatePolicy,
}

impl ApplicationMerger {
    /// Merger with the built-in sub-mergers
    pub fn new(tag_policy: TagDuplicatePolicy) -> Self {
        Self {
            claims: Box::new(ClaimConfigurationMerger),
            authentication: Box::new(AuthenticationSequenceMerger),
            advanced: Box::new(AdvancedConfigurationMerger),
            provisioning: Box::new(ProvisioningConfigurationMerger),
            tag_policy,
        }
    }

    pub fn with_claim_merger(
        mut self,
        merger: impl UpdateFunction<Application, ClaimConfigurationPatch> + 'static,
    ) -> Self {
        self.claims = Box::new(merger);
        self
    }

    pub fn with_authentication_merger(
        mut self,
        merger: impl UpdateFunction<Application, AuthenticationSequencePatch> + 'static,
    ) -> Self {
        self.authentication = Box::new(merger);
        self
    }

    pub fn with_advanced_merger(
        mut self,
        merger: impl UpdateFunction<Application, AdvancedConfigurationPatch> + 'static,
    ) -> Self {
        self.advanced = Box::new(merger);
        self
    }

    pub fn with_provisioning_merger(
        mut self,
        merger: impl UpdateFunction<Application, ProvisioningConfigurationPatch> + 'static,
    ) -> Self {
        self.provisioning = Box::new(merger);
        self
    }

    pub fn tag_policy(&self) -> TagDuplicatePolicy {
        self.tag_policy
    }

    /// Merge `patch` into `app` in place.
    ///
    /// Scalar fields and tags always apply. Each nested block applies
    /// independently; blocks that fail validation are skipped and reported
    /// together in [`PatchError::Rejected`] after the rest of the patch has
    /// been applied. Earlier mutations are not rolled back.
    pub fn apply(&self, app: &mut Application, patch: &ApplicationPatch) -> Result<(), PatchError> {
        set_if_present(patch.name.clone(), |v| app.name = v);
        set_if_present(patch.description.clone(), |v| app.description = Some(v));
        set_if_present(patch.image_url.clone(), |v| app.image_url = Some(v));
        set_if_present(patch.access_url.clone(), |v| app.access_url = Some(v));
        set_if_present(patch.template_id.clone(), |v| app.template_id = Some(v));

        let mut rejected = Vec::new();
        apply_block(self.claims.as_ref(), app, patch.claim_configuration.as_ref(), &mut rejected);
        apply_block(
            self.authentication.as_ref(),
            app,
            patch.authentication_sequence.as_ref(),
            &mut rejected,
        );
        apply_block(
            self.advanced.as_ref(),
            app,
            patch.advanced_configurations.as_ref(),
            &mut rejected,
        );
        apply_block(
            self.provisioning.as_ref(),
            app,
            patch.provisioning_configurations.as_ref(),
            &mut rejected,
        );

        patch_tags(app, patch.tags.as_deref(), self.tag_policy);

        if rejected.is_empty() {
            debug!(application_id = %app.application_id, "Patch applied");
            Ok(())
        } else {
            Err(PatchError::Rejected(rejected))
        }
    }
}

impl Default for ApplicationMerger {
    fn default() -> Self {
        Self::new(TagDuplicatePolicy::default())
    }
}

fn apply_block<P>(
    merger: &dyn UpdateFunction<Application, P>,
    app: &mut Application,
    block: Option<&P>,
    rejected: &mut Vec<ValidationError>,
) {
    let Some(block) = block else {
        return;
    };
    if let Err(e) = merger.apply(app, block) {
        warn!(
            application_id = %app.application_id,
            block = %e.block,
            reason = %e.reason,
            "Patch block rejected"
        );
        rejected.push(e);
    }
}
