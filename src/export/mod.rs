//! Prompt-then-save export of text lines.
//!
//! [`export`] is the only entry point callers need: it checks the call
//! contract, asks the user for a filename through a [`FilenamePrompt`],
//! validates it and writes the file. Everything the user should hear about
//! goes through the injected [`Notifier`]; nothing but contract violations
//! comes back as an error.

pub mod filename;
pub mod gate;
pub mod notice;
pub mod prompt;
pub mod writer;

use std::path::{Component, Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::error::{ContractError, SaveError};
use filename::{validate_filename, FilenameInput};
use notice::{Notice, Notifier};
use prompt::{FilenamePrompt, PromptRequest, PromptResponse, PROMPT_TITLE};

/// Capabilities one export call runs against.
pub struct ExportContext<'a> {
    pub storage_root: PathBuf,
    pub prompt: &'a mut dyn FilenamePrompt,
    pub notifier: &'a dyn Notifier,
}

impl<'a> ExportContext<'a> {
    pub fn new(
        storage_root: impl Into<PathBuf>,
        prompt: &'a mut dyn FilenamePrompt,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            storage_root: storage_root.into(),
            prompt,
            notifier,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ExportOutcome {
    /// Nothing to write; no prompt was shown.
    EmptyInput,
    Cancelled,
    Saved { path: PathBuf },
    /// An I/O error stopped the write. Already reported to the user.
    Failed,
}

/// Reject arguments that can only come from a programming mistake.
pub fn check_contract(max_name_length: usize, directory_name: &str) -> Result<(), ContractError> {
    if max_name_length < 1 {
        return Err(ContractError::InvalidMaxNameLength);
    }
    let dir = directory_name.trim();
    if dir.is_empty() {
        return Err(ContractError::EmptyDirectoryName);
    }
    let escapes = Path::new(dir).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(ContractError::DirectoryEscapesRoot(dir.to_string()));
    }
    Ok(())
}

fn retry_request(previous: &PromptRequest, rejected: &str) -> PromptRequest {
    let field = FilenameInput::with_text(previous.max_name_length, rejected);
    PromptRequest {
        title: previous.title.clone(),
        text: field.text().to_string(),
        max_name_length: previous.max_name_length,
        attempt: previous.attempt + 1,
    }
}

/// Ask for a filename and save `lines` to
/// `<storage root>/<directory_name>/<filename>.txt`.
///
/// An empty `lines` fires [`Notice::EmptyInput`] and returns without
/// prompting. Invalid names and name collisions keep the prompt open; a
/// cancel or an I/O failure ends the call.
pub fn export<S: AsRef<str>>(
    ctx: &mut ExportContext<'_>,
    lines: &[S],
    max_name_length: usize,
    directory_name: &str,
) -> Result<ExportOutcome, ContractError> {
    if lines.is_empty() {
        ctx.notifier.notify(&Notice::EmptyInput);
        return Ok(ExportOutcome::EmptyInput);
    }
    check_contract(max_name_length, directory_name)?;

    let field = FilenameInput::with_default(max_name_length, Local::now().naive_local());
    let mut request = PromptRequest {
        title: PROMPT_TITLE.to_string(),
        text: field.text().to_string(),
        max_name_length,
        attempt: 1,
    };

    loop {
        let candidate = match ctx.prompt.prompt(&request) {
            PromptResponse::Save(candidate) => candidate,
            PromptResponse::Cancel => {
                log::debug!("export cancelled after {} attempt(s)", request.attempt);
                return Ok(ExportOutcome::Cancelled);
            }
        };

        let filename = match validate_filename(&candidate, max_name_length) {
            Ok(name) => name,
            Err(e) => {
                log::debug!("rejected filename {candidate:?}: {e}");
                ctx.notifier.notify(&Notice::InvalidFilename);
                request = retry_request(&request, &candidate);
                continue;
            }
        };

        match writer::save_lines(&ctx.storage_root, directory_name, &filename, lines) {
            Ok(path) => {
                log::info!("exported {} line(s) to {}", lines.len(), path.display());
                ctx.notifier.notify(&Notice::Saved {
                    filename: filename.file_name(),
                });
                return Ok(ExportOutcome::Saved { path });
            }
            Err(SaveError::AlreadyExists(path)) => {
                log::warn!("export target already exists: {}", path.display());
                ctx.notifier.notify(&Notice::FileExists);
                request = retry_request(&request, &candidate);
            }
            Err(SaveError::Io(e)) => {
                log::error!("File export error: {e}");
                ctx.notifier.notify(&Notice::ExportFailed);
                return Ok(ExportOutcome::Failed);
            }
        }
    }
}
