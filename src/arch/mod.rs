//! Platform seams for locating storage.
//!
//! The selection logic lives in [`paths`] and is plain Rust; only the
//! directory lookups below touch Tauri.

pub mod paths;

#[cfg(feature = "app")]
use std::path::PathBuf;

#[cfg(feature = "app")]
use tauri::Manager;

#[cfg(feature = "app")]
use crate::config::ExporterSettings;

/// Root directory exports are written under.
///
/// Uses `settings.storage_root` when configured, else the platform
/// documents directory, else the app data directory. Fails only when none
/// of them can be determined.
#[cfg(feature = "app")]
pub fn storage_root(app: &tauri::AppHandle, settings: &ExporterSettings) -> tauri::Result<PathBuf> {
    let resolver = app.path();
    let documents = resolver.document_dir().ok();
    let app_data = resolver.app_data_dir().ok();
    paths::pick_storage_root(settings.storage_root.as_deref(), documents, app_data)
        .ok_or(tauri::Error::UnknownPath)
}

#[cfg(feature = "app")]
pub fn app_config_dir(app: &tauri::AppHandle) -> tauri::Result<PathBuf> {
    app.path().app_config_dir()
}
