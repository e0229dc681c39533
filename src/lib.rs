//! Save a list of text lines to a user-named `.txt` file.
//!
//! The library is UI-agnostic: callers provide a [`FilenamePrompt`] and a
//! [`Notifier`] and call [`export()`]. With the `app` feature the crate
//! also builds the Tauri shell that renders both in a webview.

#[cfg(feature = "app")]
mod app;
mod arch;
pub mod config;
pub mod error;
pub mod export;

pub use arch::paths::pick_storage_root;
pub use config::ExporterSettings;
pub use error::{ConfigError, ContractError, ExportInProgress, FilenameError, SaveError};
pub use export::filename::{validate_filename, FilenameInput, ValidFilename, FORBIDDEN_CHARS};
pub use export::gate::{ExportGate, ExportPass};
pub use export::notice::{LogNotifier, Notice, NoticeDuration, Notifier};
pub use export::prompt::{FilenamePrompt, PromptBridge, PromptRequest, PromptResponse};
pub use export::{export, ExportContext, ExportOutcome};

#[cfg(feature = "app")]
pub use app::run;
