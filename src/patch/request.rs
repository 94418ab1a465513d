//! Patch request payloads
//!
//! Wire shapes for a partial application update. Every field is optional and
//! absence means "leave unchanged"; `null` is treated the same as absence.

use crate::application::{
    AuthenticationStep, CertificateType, ClaimDialect, OutboundProvisioningIdp, RequestedClaim,
    SequenceType,
};
use crate::error::PatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sparse update for an application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_configuration: Option<ClaimConfigurationPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_sequence: Option<AuthenticationSequencePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_configurations: Option<AdvancedConfigurationPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_configurations: Option<ProvisioningConfigurationPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagOperation>>,
}

impl ApplicationPatch {
    /// Parse a JSON patch body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True when applying this patch cannot change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.access_url.is_none()
            && self.template_id.is_none()
            && self.claim_configuration.is_none()
            && self.authentication_sequence.is_none()
            && self.advanced_configurations.is_none()
            && self.provisioning_configurations.is_none()
            && self.tags.as_ref().map_or(true, |ops| ops.is_empty())
    }
}

/// Kind of a tag operation, closed at deserialization time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum TagOperationKind {
    Add,
    Remove,
}

impl TagOperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagOperationKind::Add => "ADD",
            TagOperationKind::Remove => "REMOVE",
        }
    }
}

impl fmt::Display for TagOperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagOperationKind {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ADD") {
            Ok(TagOperationKind::Add)
        } else if s.eq_ignore_ascii_case("REMOVE") {
            Ok(TagOperationKind::Remove)
        } else {
            Err(PatchError::UnsupportedOperation(s.to_string()))
        }
    }
}

impl TryFrom<String> for TagOperationKind {
    type Error = PatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tag identifier inside a tag operation
///
/// Accepted as either `"t1"` or `{"value": "t1"}`; always written in the object form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTagValue")]
pub struct TagValue {
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTagValue {
    Plain(String),
    Wrapped { value: String },
}

impl From<RawTagValue> for TagValue {
    fn from(raw: RawTagValue) -> Self {
        match raw {
            RawTagValue::Plain(value) | RawTagValue::Wrapped { value } => TagValue { value },
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue {
            value: value.to_string(),
        }
    }
}

/// ADD or REMOVE a list of tag identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOperation {
    pub operation: TagOperationKind,
    #[serde(default)]
    pub tags: Vec<TagValue>,
}

impl TagOperation {
    pub fn add<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(TagOperationKind::Add, values)
    }

    pub fn remove<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(TagOperationKind::Remove, values)
    }

    fn new<I, S>(operation: TagOperationKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            operation,
            tags: values
                .into_iter()
                .map(|v| TagValue::from(v.as_ref()))
                .collect(),
        }
    }

    /// Tag identifiers in request order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_user_domain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tenant_domain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_mapped_local_subject: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_user_domain: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimConfigurationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<ClaimDialect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RolePatch>,
    /// Replaces the requested claim list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_claims: Option<Vec<RequestedClaim>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSequencePatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<AuthenticationStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_path_authenticators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_step_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_step_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatePatch {
    #[serde(rename = "type")]
    pub kind: CertificateType,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedConfigurationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saas: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discoverable_by_end_users: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_login_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_logout_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_authenticated_idp_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_authorization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificatePatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundProvisioningPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_userstore_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningConfigurationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_provisioning: Option<InboundProvisioningPatch>,
    /// Replaces the outbound connector list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_provisioning_idps: Option<Vec<OutboundProvisioningIdp>>,
}
