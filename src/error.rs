//! Error types for the appmerge patch engine.

use std::fmt;
use thiserror::Error;

/// Nested configuration block of an application patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchBlock {
    ClaimConfiguration,
    AuthenticationSequence,
    AdvancedConfiguration,
    ProvisioningConfiguration,
}

impl PatchBlock {
    /// Wire name of the block inside the patch payload
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchBlock::ClaimConfiguration => "claimConfiguration",
            PatchBlock::AuthenticationSequence => "authenticationSequence",
            PatchBlock::AdvancedConfiguration => "advancedConfigurations",
            PatchBlock::ProvisioningConfiguration => "provisioningConfigurations",
        }
    }
}

impl fmt::Display for PatchBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nested patch block was structurally invalid and was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {block}: {reason}")]
pub struct ValidationError {
    pub block: PatchBlock,
    pub reason: String,
}

impl ValidationError {
    pub fn new(block: PatchBlock, reason: impl Into<String>) -> Self {
        Self {
            block,
            reason: reason.into(),
        }
    }
}

/// Patch-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Unsupported tag operation: {0}")]
    UnsupportedOperation(String),

    #[error("Patch rejected: {}", join_reasons(.0))]
    Rejected(Vec<ValidationError>),
}

impl PatchError {
    /// Blocks that were rejected, in the order they were applied
    pub fn rejected_blocks(&self) -> Vec<PatchBlock> {
        match self {
            PatchError::Rejected(errors) => errors.iter().map(|e| e.block).collect(),
            PatchError::UnsupportedOperation(_) => Vec::new(),
        }
    }
}

fn join_reasons(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Service registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unable to retrieve {service} service")]
    ServiceUnavailable { service: &'static str },
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Corrupt record for application {id}: {reason}")]
    CorruptRecord { id: String, reason: String },
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// API-level errors surfaced by the application service and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    #[error("Application already exists: {0}")]
    ApplicationExists(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Patch error: {0}")]
    Patch(#[from] PatchError),

    #[error("Service error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
