//! Shared test utilities for integration tests

use appmerge::application::{Application, ApplicationTag};
use std::sync::Mutex;

/// Serializes tests that read or write `APPMERGE__*` environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with the given environment variables set, restoring them afterwards
pub fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
        .collect();
    for (k, v) in vars {
        std::env::set_var(k, v);
    }

    let result = f();

    for (k, orig) in saved {
        match orig {
            Some(v) => std::env::set_var(&k, v),
            None => std::env::remove_var(&k),
        }
    }
    result
}

/// A fully populated application used as the starting point of most tests
pub fn sample_application() -> Application {
    let mut app = Application::new("console", "Console");
    app.description = Some("Administration console".to_string());
    app.image_url = Some("https://cdn.example.com/console.png".to_string());
    app.access_url = Some("https://console.example.com".to_string());
    app.template_id = Some("web-app".to_string());
    app.tags = vec![
        ApplicationTag {
            id: "internal".to_string(),
            name: Some("Internal".to_string()),
            colour: Some("#336699".to_string()),
        },
        ApplicationTag::from_id("admin"),
    ];
    app
}
