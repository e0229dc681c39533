use serde::Serialize;

/// How long a notice should stay on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeDuration {
    Short,
    Long,
}

/// Transient, user-facing messages raised during an export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notice {
    EmptyInput,
    InvalidCharacter,
    InvalidFilename,
    FileExists,
    Saved { filename: String },
    ExportFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EmptyInput => "Input empty".to_string(),
            Notice::InvalidCharacter => "Invalid character".to_string(),
            Notice::InvalidFilename => "Please enter a valid filename".to_string(),
            Notice::FileExists => "File already exists".to_string(),
            Notice::Saved { filename } => format!("File successfully saved as: \"{filename}\""),
            Notice::ExportFailed => "File export error".to_string(),
        }
    }

    pub fn duration(&self) -> NoticeDuration {
        match self {
            Notice::InvalidCharacter => NoticeDuration::Long,
            _ => NoticeDuration::Short,
        }
    }
}

/// Fire-and-forget sink for notices.
///
/// The export routine never waits on a notifier and never inspects a result,
/// so implementations must swallow their own delivery failures.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Routes notices to the `log` facade. Useful for headless callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::ExportFailed => log::error!("{}", notice.message()),
            Notice::Saved { .. } => log::info!("{}", notice.message()),
            _ => log::warn!("{}", notice.message()),
        }
    }
}
