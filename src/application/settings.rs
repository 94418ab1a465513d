//! Configuration sub-structures of an application.

use serde::{Deserialize, Serialize};

/// Claim dialect used by the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimDialect {
    #[default]
    Local,
    Custom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_uri: Option<String>,
    #[serde(default)]
    pub include_user_domain: bool,
    #[serde(default)]
    pub include_tenant_domain: bool,
    #[serde(default)]
    pub use_mapped_local_subject: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_uri: Option<String>,
    #[serde(default)]
    pub include_user_domain: bool,
}

/// Claim requested by the application from the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedClaim {
    pub claim_uri: String,
    #[serde(default)]
    pub mandatory: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimConfig {
    #[serde(default)]
    pub dialect: ClaimDialect,
    #[serde(default)]
    pub subject: SubjectConfig,
    #[serde(default)]
    pub role: RoleConfig,
    #[serde(default)]
    pub requested_claims: Vec<RequestedClaim>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequenceType {
    #[default]
    Default,
    UserDefined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorOption {
    pub idp: String,
    pub authenticator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationStep {
    pub id: u32,
    #[serde(default)]
    pub options: Vec<AuthenticatorOption>,
}

/// Login flow of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSequence {
    #[serde(rename = "type", default)]
    pub sequence_type: SequenceType,
    #[serde(default)]
    pub steps: Vec<AuthenticationStep>,
    #[serde(default)]
    pub request_path_authenticators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default = "default_step_id")]
    pub subject_step_id: u32,
    #[serde(default = "default_step_id")]
    pub attribute_step_id: u32,
}

fn default_step_id() -> u32 {
    1
}

impl Default for AuthenticationSequence {
    fn default() -> Self {
        Self {
            sequence_type: SequenceType::Default,
            steps: Vec::new(),
            request_path_authenticators: Vec::new(),
            script: None,
            subject_step_id: default_step_id(),
            attribute_step_id: default_step_id(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateType {
    Jwks,
    Pem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "type")]
    pub kind: CertificateType,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedConfig {
    #[serde(default)]
    pub saas: bool,
    #[serde(default)]
    pub discoverable_by_end_users: bool,
    #[serde(default)]
    pub skip_login_consent: bool,
    #[serde(default)]
    pub skip_logout_consent: bool,
    #[serde(default)]
    pub return_authenticated_idp_list: bool,
    #[serde(default)]
    pub enable_authorization: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundProvisioning {
    #[serde(default)]
    pub proxy_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_userstore_domain: Option<String>,
}

/// Outbound provisioning connector bound to an identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundProvisioningIdp {
    pub idp: String,
    pub connector: String,
    #[serde(default)]
    pub blocking: bool,
    #[serde(default)]
    pub rules: bool,
    #[serde(default)]
    pub jit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningConfig {
    #[serde(default)]
    pub inbound_provisioning: InboundProvisioning,
    #[serde(default)]
    pub outbound_provisioning_idps: Vec<OutboundProvisioningIdp>,
}
