//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, PatchError};

/// Map domain/service errors to a string for CLI output.
///
/// Rejected patches list one block per line so each problem is visible.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Patch(PatchError::Rejected(errors)) => {
            let mut s = format!("Patch rejected ({} block(s)):", errors.len());
            for err in errors {
                s.push_str(&format!("\n  - {}", err));
            }
            s
        }
        other => other.to_string(),
    }
}
