//! CLI route: single route table and run context. Dispatches to the application service.

use crate::application::Application;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_application_json, format_application_list};
use crate::config::{AppmergeConfig, ConfigLoader};
use crate::error::ApiError;
use crate::patch::{ApplicationMerger, ApplicationPatch};
use crate::registry::ServiceRegistry;
use crate::service::{ApplicationService, ServiceContext};
use crate::store::{ApplicationStore, SledApplicationStore};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, config, and the service registry.
///
/// The sled store is opened on first use, so `apply` never touches the workspace.
pub struct RunContext {
    workspace_root: PathBuf,
    config: AppmergeConfig,
    registry: ServiceRegistry,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: AppmergeConfig) -> Self {
        let registry = ServiceRegistry::new();
        registry.register(Arc::new(ApplicationMerger::new(
            config.patch.tag_duplicates,
        )));
        Self {
            workspace_root,
            config,
            registry,
        }
    }

    pub fn config(&self) -> &AppmergeConfig {
        &self.config
    }

    fn merger(&self) -> Result<Arc<ApplicationMerger>, ApiError> {
        Ok(self.registry.resolve::<Arc<ApplicationMerger>>()?)
    }

    fn application_service(&self) -> Result<ApplicationService, ApiError> {
        if !self.registry.contains::<Arc<dyn ApplicationStore>>() {
            let store_path = self
                .config
                .storage
                .resolve_store_path(&self.workspace_root);
            std::fs::create_dir_all(&store_path)
                .map_err(|e| ApiError::StorageError(crate::error::StorageError::IoError(e)))?;
            debug!(store_path = %store_path.display(), "Opening application store");
            let store: Arc<dyn ApplicationStore> = Arc::new(SledApplicationStore::new(&store_path)?);
            self.registry.register(store);
        }
        Ok(ApplicationService::new(ServiceContext::from_registry(
            &self.registry,
        )?))
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Apply { application, patch } => {
                let mut app: Application = read_payload(application)?;
                let patch: ApplicationPatch = read_payload(patch)?;
                self.merger()?.apply(&mut app, &patch)?;
                format_application_json(&app)
            }
            Commands::Import { application } => {
                let app: Application = read_payload(application)?;
                self.application_service()?.create(&app)?;
                Ok(format!("Imported application {}", app.application_id))
            }
            Commands::Show { id } => {
                let app = self.application_service()?.get(id)?;
                format_application_json(&app)
            }
            Commands::List { format } => {
                let apps = self.application_service()?.list()?;
                format_application_list(&apps, format)
            }
            Commands::Patch { id, patch } => {
                let patch: ApplicationPatch = read_payload(patch)?;
                let app = self.application_service()?.patch(id, &patch)?;
                info!(application_id = %id, "Patch command completed");
                format_application_json(&app)
            }
            Commands::Delete { id } => {
                self.application_service()?.delete(id)?;
                Ok(format!("Deleted application {}", id))
            }
        }
    }
}

/// Read a JSON or TOML payload, chosen by file extension (JSON unless `.toml`).
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::InvalidPayload(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        toml::from_str(&content)
            .map_err(|e| ApiError::InvalidPayload(format!("{}: {}", path.display(), e)))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| ApiError::InvalidPayload(format!("{}: {}", path.display(), e)))
    }
}
