//! Patch engine
//!
//! Merges a sparse [`ApplicationPatch`] into an [`Application`](crate::application::Application).
//! Absent fields mean "no change". Nested configuration blocks are delegated to
//! pluggable sub-mergers; tag operations are applied in request order.

pub mod advanced;
pub mod assign;
pub mod auth_sequence;
pub mod claims;
pub mod merger;
pub mod provisioning;
pub mod request;
pub mod tags;

pub use assign::{assign_if_present, set_if_present};
pub use merger::{ApplicationMerger, UpdateFunction};
pub use request::{
    AdvancedConfigurationPatch, ApplicationPatch, AuthenticationSequencePatch, CertificatePatch,
    ClaimConfigurationPatch, InboundProvisioningPatch, ProvisioningConfigurationPatch,
    RolePatch, SubjectPatch, TagOperation, TagOperationKind, TagValue,
};
pub use tags::{patch_tags, TagDuplicatePolicy};
