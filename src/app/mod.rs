// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
mod bridge;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Manager, State, WindowEvent};

use crate::arch;
use crate::config::ExporterSettings;
use crate::export::filename::FilenameInput;
use crate::export::gate::ExportGate;
use crate::export::prompt::{PromptBridge, PromptResponse};
use crate::export::{export, ExportContext, ExportOutcome};
use bridge::{TauriNotifier, TauriPrompt};

pub struct AppState {
    settings: ExporterSettings,
    storage_root: PathBuf,
    prompts: Arc<PromptBridge>,
    gate: Arc<ExportGate>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDefaults {
    max_name_length: usize,
    directory_name: String,
    storage_root: PathBuf,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilteredInput {
    text: String,
    /// Character offset to place the caret at.
    caret: usize,
}

#[tauri::command]
fn export_defaults(state: State<'_, Arc<AppState>>) -> ExportDefaults {
    ExportDefaults {
        max_name_length: state.settings.max_name_length,
        directory_name: state.settings.directory_name.clone(),
        storage_root: state.storage_root.clone(),
    }
}

#[tauri::command]
async fn export_lines(
    app: AppHandle,
    state: State<'_, Arc<AppState>>,
    lines: Vec<String>,
    max_name_length: Option<usize>,
    directory_name: Option<String>,
) -> Result<ExportOutcome, String> {
    let state = state.inner().clone();
    let pass = state.gate.try_enter().map_err(|e| e.to_string())?;
    let max = max_name_length.unwrap_or(state.settings.max_name_length);
    let dir = directory_name.unwrap_or_else(|| state.settings.directory_name.clone());

    // The prompt blocks until the webview answers, so keep it off the async workers.
    tauri::async_runtime::spawn_blocking(move || {
        let _pass = pass;
        let notifier = TauriNotifier::new(app.clone());
        let mut prompt = TauriPrompt::new(app, Arc::clone(&state.prompts));
        let mut ctx = ExportContext::new(state.storage_root.clone(), &mut prompt, &notifier);
        export(&mut ctx, lines.as_slice(), max, &dir)
    })
    .await
    .map_err(|e| e.to_string())?
    .map_err(|e| e.to_string())
}

#[tauri::command]
fn export_prompt_respond(
    state: State<'_, Arc<AppState>>,
    request_id: u64,
    filename: Option<String>,
) -> Result<(), String> {
    let response = match filename {
        Some(name) => PromptResponse::Save(name),
        None => PromptResponse::Cancel,
    };
    if state.prompts.answer(request_id, response) {
        Ok(())
    } else {
        Err(format!("no open prompt with id {request_id}"))
    }
}

#[tauri::command]
fn filename_filter(
    app: AppHandle,
    state: State<'_, Arc<AppState>>,
    current: String,
    position: usize,
    segment: String,
    max_name_length: Option<usize>,
) -> FilteredInput {
    let max = max_name_length.unwrap_or(state.settings.max_name_length);
    let mut field = FilenameInput::with_text(max, &current);
    let at = position.min(field.text().chars().count());
    let inserted = field.insert_at(at, &segment, &TauriNotifier::new(app));
    FilteredInput {
        text: field.text().to_string(),
        caret: at + inserted,
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            let config_path = arch::app_config_dir(app.handle())?.join(ExporterSettings::FILE_NAME);
            let settings = ExporterSettings::load(&config_path)?.with_env_overrides();
            let storage_root = arch::storage_root(app.handle(), &settings)?;
            log::info!(
                "exports go to {}",
                storage_root.join(settings.directory_name.trim()).display()
            );

            app.manage(Arc::new(AppState {
                settings,
                storage_root,
                prompts: Arc::new(PromptBridge::new()),
                gate: Arc::new(ExportGate::new()),
            }));
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                // Release any export still parked on a dialog that no longer exists.
                if let Some(state) = window.try_state::<Arc<AppState>>() {
                    state.prompts.cancel_all();
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            export_defaults,
            export_lines,
            export_prompt_respond,
            filename_filter,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
