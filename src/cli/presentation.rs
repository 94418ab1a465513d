//! Presentation: application formatters for CLI output.

use crate::application::Application;
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_application_json(application: &Application) -> Result<String, ApiError> {
    serde_json::to_string_pretty(application)
        .map_err(|e| ApiError::InvalidPayload(format!("Failed to render application: {}", e)))
}

pub fn format_application_list(
    applications: &[Application],
    format: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        return serde_json::to_string_pretty(applications).map_err(|e| {
            ApiError::InvalidPayload(format!("Failed to render applications: {}", e))
        });
    }

    if applications.is_empty() {
        return Ok("No applications stored.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Template", "Tags"]);
    for app in applications {
        table.add_row(vec![
            app.application_id.clone(),
            app.name.clone(),
            app.template_id.clone().unwrap_or_else(|| "-".to_string()),
            app.tag_ids().join(", "),
        ]);
    }
    Ok(table.to_string())
}
