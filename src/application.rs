//! Application domain model
//!
//! The entity a patch is merged into. Loaded from and persisted to an
//! [`ApplicationStore`](crate::store::ApplicationStore) around each merge.

pub mod model;
pub mod settings;

pub use model::{Application, ApplicationTag};
pub use settings::{
    AdvancedConfig, AuthenticationSequence, AuthenticationStep, AuthenticatorOption, Certificate,
    CertificateType, ClaimConfig, ClaimDialect, InboundProvisioning, OutboundProvisioningIdp,
    ProvisioningConfig, RequestedClaim, RoleConfig, SequenceType, SubjectConfig,
};
