use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::export::notice::{Notice, NoticeDuration, Notifier};
use crate::export::prompt::{FilenamePrompt, PromptBridge, PromptRequest, PromptResponse};

pub const PROMPT_EVENT: &str = "export-prompt";
pub const NOTICE_EVENT: &str = "export-notice";

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct PromptEvent<'a> {
    request_id: u64,
    #[serde(flatten)]
    request: &'a PromptRequest,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct NoticeEvent<'a> {
    #[serde(flatten)]
    notice: &'a Notice,
    message: String,
    duration: NoticeDuration,
}

/// Shows notices as transient messages in the webview.
pub struct TauriNotifier {
    app: AppHandle,
}

impl TauriNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl Notifier for TauriNotifier {
    fn notify(&self, notice: &Notice) {
        let event = NoticeEvent {
            notice,
            message: notice.message(),
            duration: notice.duration(),
        };
        if let Err(e) = self.app.emit(NOTICE_EVENT, event) {
            log::warn!("failed to emit notice: {e}");
        }
    }
}

/// Filename dialog rendered by the webview.
///
/// Must run off the main thread: it blocks until `export_prompt_respond`
/// delivers the answer.
pub struct TauriPrompt {
    app: AppHandle,
    bridge: Arc<PromptBridge>,
}

impl TauriPrompt {
    pub fn new(app: AppHandle, bridge: Arc<PromptBridge>) -> Self {
        Self { app, bridge }
    }
}

impl FilenamePrompt for TauriPrompt {
    fn prompt(&mut self, request: &PromptRequest) -> PromptResponse {
        let app = &self.app;
        self.bridge.ask(request, |request_id, request| {
            app.emit(PROMPT_EVENT, PromptEvent { request_id, request })
                .map_err(|e| log::error!("failed to emit prompt: {e}"))
                .is_ok()
        })
    }
}
