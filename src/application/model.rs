//! Application entity and tag records.

use crate::application::settings::{
    AdvancedConfig, AuthenticationSequence, ClaimConfig, ProvisioningConfig,
};
use serde::{Deserialize, Serialize};

/// Tag attached to an application
///
/// Only `id` takes part in tag patching; `name` and `colour` are display data
/// owned by the tag catalogue and are dropped when tags are rebuilt from a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationTag {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

impl ApplicationTag {
    /// Build a bare tag record from its identifier
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            colour: None,
        }
    }
}

/// Application (service provider) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Stable identifier, used as the storage key
    pub application_id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default)]
    pub claim_configuration: ClaimConfig,

    #[serde(default)]
    pub authentication_sequence: AuthenticationSequence,

    #[serde(default)]
    pub advanced_configurations: AdvancedConfig,

    #[serde(default)]
    pub provisioning_configurations: ProvisioningConfig,

    #[serde(default)]
    pub tags: Vec<ApplicationTag>,
}

impl Application {
    /// Create an application with default configuration and no tags
    pub fn new(application_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            name: name.into(),
            description: None,
            image_url: None,
            access_url: None,
            template_id: None,
            claim_configuration: ClaimConfig::default(),
            authentication_sequence: AuthenticationSequence::default(),
            advanced_configurations: AdvancedConfig::default(),
            provisioning_configurations: ProvisioningConfig::default(),
            tags: Vec::new(),
        }
    }

    /// Attach tags by identifier, in order
    pub fn with_tags<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = ids.into_iter().map(ApplicationTag::from_id).collect();
        self
    }

    /// Current tag identifiers, in stored order
    pub fn tag_ids(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.id.as_str()).collect()
    }
}
