use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Mutex};

use serde::Serialize;

pub const PROMPT_TITLE: &str = "Enter filename";

/// What the prompt shows the user on each attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub title: String,
    /// Current contents of the filename field.
    pub text: String,
    pub max_name_length: usize,
    /// 1 for the first showing, incremented each time the dialog stays open.
    pub attempt: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptResponse {
    Save(String),
    Cancel,
}

/// Blocking confirm/cancel dialog for the filename.
///
/// `prompt` must not return until the user has either confirmed or
/// dismissed the dialog.
pub trait FilenamePrompt {
    fn prompt(&mut self, request: &PromptRequest) -> PromptResponse;
}

/// Turns an asynchronous UI into a blocking [`FilenamePrompt`].
///
/// The asking side shows the dialog under a fresh request id and parks on a
/// channel; the UI later calls [`PromptBridge::answer`] with that id. A
/// dropped or abandoned request reads as a cancel.
#[derive(Default)]
pub struct PromptBridge {
    next_id: AtomicU64,
    waiting: Mutex<HashMap<u64, mpsc::Sender<PromptResponse>>>,
}

impl PromptBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `request` through `show` and block until it is answered.
    ///
    /// `show` returns `false` when the dialog could not be displayed.
    pub fn ask(
        &self,
        request: &PromptRequest,
        show: impl FnOnce(u64, &PromptRequest) -> bool,
    ) -> PromptResponse {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let (tx, rx) = mpsc::channel();
        self.waiting
            .lock()
            .expect("poisoned prompt lock")
            .insert(id, tx);

        if !show(id, request) {
            log::warn!("prompt {id} could not be shown");
            self.forget(id);
            return PromptResponse::Cancel;
        }
        rx.recv().unwrap_or(PromptResponse::Cancel)
    }

    /// Deliver the user's answer. Returns `false` for unknown ids.
    pub fn answer(&self, id: u64, response: PromptResponse) -> bool {
        let sender = self
            .waiting
            .lock()
            .expect("poisoned prompt lock")
            .remove(&id);
        match sender {
            Some(tx) => tx.send(response).is_ok(),
            None => false,
        }
    }

    /// Cancel every open prompt, e.g. when the window goes away.
    pub fn cancel_all(&self) {
        let drained: Vec<_> = self
            .waiting
            .lock()
            .expect("poisoned prompt lock")
            .drain()
            .collect();
        for (_, tx) in drained {
            let _ = tx.send(PromptResponse::Cancel);
        }
    }

    fn forget(&self, id: u64) {
        self.waiting
            .lock()
            .expect("poisoned prompt lock")
            .remove(&id);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::{FilenamePrompt, PromptRequest, PromptResponse};

    /// Replays canned answers, then cancels.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<PromptResponse>,
        pub seen: Vec<PromptRequest>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: impl IntoIterator<Item = PromptResponse>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                seen: Vec::new(),
            }
        }

        pub fn saving(names: &[&str]) -> Self {
            Self::new(names.iter().map(|n| PromptResponse::Save(n.to_string())))
        }
    }

    impl FilenamePrompt for ScriptedPrompt {
        fn prompt(&mut self, request: &PromptRequest) -> PromptResponse {
            self.seen.push(request.clone());
            self.answers.pop_front().unwrap_or(PromptResponse::Cancel)
        }
    }
}
