//! Filename rules for exported files.
//!
//! Two layers guard the name:
//! - [`FilenameInput`] filters keystrokes while the user edits the field,
//!   dropping any inserted segment that carries a forbidden character and
//!   cutting insertions that would overflow the length cap.
//! - [`validate_filename`] runs once on confirm and is the blocking check.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::FilenameError;
use crate::export::notice::{Notice, Notifier};

/// Characters that are never allowed in a filename.
pub const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

pub const FILE_EXTENSION: &str = "txt";

const DEFAULT_NAME_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

pub fn is_forbidden(ch: char) -> bool {
    FORBIDDEN_CHARS.contains(&ch)
}

fn first_forbidden(s: &str) -> Option<char> {
    s.chars().find(|&ch| is_forbidden(ch))
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A filename that passed [`validate_filename`]. Holds the bare name,
/// without extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidFilename(String);

impl ValidFilename {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The on-disk name, `<name>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.{FILE_EXTENSION}", self.0)
    }
}

impl fmt::Display for ValidFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirm-time check. Rejects empty names and names with a forbidden
/// character; anything longer than `max_len` characters is cut to fit.
pub fn validate_filename(candidate: &str, max_len: usize) -> Result<ValidFilename, FilenameError> {
    if candidate.is_empty() {
        return Err(FilenameError::Empty);
    }
    if let Some(ch) = first_forbidden(candidate) {
        return Err(FilenameError::InvalidCharacter(ch));
    }
    Ok(ValidFilename(truncate_chars(candidate, max_len).to_string()))
}

/// Suggested name shown when the dialog opens: the timestamp, capped.
pub fn default_filename(now: NaiveDateTime, max_len: usize) -> String {
    let stamp = now.format(DEFAULT_NAME_FORMAT).to_string();
    truncate_chars(&stamp, max_len).to_string()
}

/// Keystroke filter for one insertion into a field that already holds
/// `existing_len` characters.
///
/// The length cap runs first, so only the part of `segment` that fits is
/// inspected for forbidden characters. Returns the text to insert (possibly
/// empty when the field is full).
pub fn filter_insertion(
    existing_len: usize,
    segment: &str,
    max_len: usize,
) -> Result<String, FilenameError> {
    let room = max_len.saturating_sub(existing_len);
    let kept = truncate_chars(segment, room);
    match first_forbidden(kept) {
        Some(ch) => Err(FilenameError::InvalidCharacter(ch)),
        None => Ok(kept.to_string()),
    }
}

/// Editable filename field with the input filters attached.
#[derive(Clone, Debug)]
pub struct FilenameInput {
    text: String,
    max_len: usize,
}

impl FilenameInput {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    /// Field pre-filled with the timestamp suggestion.
    pub fn with_default(max_len: usize, now: NaiveDateTime) -> Self {
        Self {
            text: default_filename(now, max_len),
            max_len,
        }
    }

    /// Field restored from text the user already sees, capped to `max_len`.
    pub fn with_text(max_len: usize, text: &str) -> Self {
        Self {
            text: truncate_chars(text, max_len).to_string(),
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append `segment` at the end of the field.
    ///
    /// A rejected segment leaves the field unchanged and fires
    /// [`Notice::InvalidCharacter`]. Returns whether anything was accepted.
    pub fn insert(&mut self, segment: &str, notifier: &dyn Notifier) -> bool {
        let end = self.text.chars().count();
        self.insert_at(end, segment, notifier) > 0
    }

    /// Insert `segment` at character position `pos` (clamped to the end).
    ///
    /// Same filters as [`FilenameInput::insert`]. Returns how many
    /// characters went in, so callers can place the caret at `pos + n`.
    pub fn insert_at(&mut self, pos: usize, segment: &str, notifier: &dyn Notifier) -> usize {
        let existing = self.text.chars().count();
        match filter_insertion(existing, segment, self.max_len) {
            Ok(kept) => {
                let at = self
                    .text
                    .char_indices()
                    .nth(pos)
                    .map_or(self.text.len(), |(idx, _)| idx);
                self.text.insert_str(at, &kept);
                kept.chars().count()
            }
            Err(_) => {
                notifier.notify(&Notice::InvalidCharacter);
                0
            }
        }
    }

    /// Replace the whole field, as a paste over a full selection would.
    pub fn replace_all(&mut self, text: &str, notifier: &dyn Notifier) -> bool {
        match filter_insertion(0, text, self.max_len) {
            Ok(kept) => {
                self.text = kept;
                true
            }
            Err(_) => {
                notifier.notify(&Notice::InvalidCharacter);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::export::notice::testing::RecordingNotifier;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 10, 23)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_validate_accepts_plain_names() {
        let name = validate_filename("shopping list", 64).unwrap();
        assert_eq!(name.as_str(), "shopping list");
        assert_eq!(name.file_name(), "shopping list.txt");
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(validate_filename("", 10), Err(FilenameError::Empty));
    }

    #[test]
    fn test_validate_rejects_each_forbidden_char() {
        for ch in FORBIDDEN_CHARS {
            let candidate = format!("a{ch}b");
            assert_eq!(
                validate_filename(&candidate, 64),
                Err(FilenameError::InvalidCharacter(ch)),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_validate_caps_length() {
        let name = validate_filename("abcdefgh", 5).unwrap();
        assert_eq!(name.as_str(), "abcde");
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let name = validate_filename("héllo wörld", 5).unwrap();
        assert_eq!(name.as_str(), "héllo");
    }

    #[test]
    fn test_default_filename_format() {
        assert_eq!(default_filename(sample_time(), 64), "2016_10_23_09_05_07");
        assert_eq!(default_filename(sample_time(), 4), "2016");
    }

    #[test]
    fn test_filter_cuts_to_remaining_room() {
        assert_eq!(filter_insertion(3, "abcdef", 5).unwrap(), "ab");
        assert_eq!(filter_insertion(5, "abc", 5).unwrap(), "");
        assert_eq!(filter_insertion(9, "abc", 5).unwrap(), "");
    }

    #[test]
    fn test_filter_only_inspects_the_part_that_fits() {
        // '*' lies past the cap and never reaches the character check.
        assert_eq!(filter_insertion(0, "ab*", 2).unwrap(), "ab");
        assert_eq!(
            filter_insertion(0, "a*b", 2),
            Err(FilenameError::InvalidCharacter('*'))
        );
    }

    #[test]
    fn test_input_drops_whole_segment_with_forbidden_char() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::new(32);
        assert!(input.insert("notes", &notifier));
        assert!(!input.insert("_a/b", &notifier));
        assert_eq!(input.text(), "notes");
        assert_eq!(notifier.take(), vec![Notice::InvalidCharacter]);
    }

    #[test]
    fn test_insert_at_cursor_mid_field() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::with_text(32, "2016_10_23");
        assert_eq!(input.insert_at(4, "x", &notifier), 1);
        assert_eq!(input.text(), "2016x_10_23");

        assert_eq!(input.insert_at(0, "a?", &notifier), 0);
        assert_eq!(input.text(), "2016x_10_23");
        assert_eq!(notifier.take(), vec![Notice::InvalidCharacter]);
    }

    #[test]
    fn test_insert_at_respects_cap_and_multibyte_positions() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::with_text(6, "héé");
        assert_eq!(input.insert_at(1, "xyzw", &notifier), 3);
        assert_eq!(input.text(), "hxyzéé");
        assert_eq!(input.insert_at(99, "q", &notifier), 0);
        assert_eq!(input.text(), "hxyzéé");
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_insert_at_past_end_appends() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::with_text(16, "ab");
        assert_eq!(input.insert_at(10, "cd", &notifier), 2);
        assert_eq!(input.text(), "abcd");
    }

    #[test]
    fn test_input_never_exceeds_max() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::new(4);
        input.insert("ab", &notifier);
        input.insert("cdef", &notifier);
        assert_eq!(input.text(), "abcd");
        assert!(!input.insert("x", &notifier));
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_input_default_and_replace() {
        let notifier = RecordingNotifier::default();
        let mut input = FilenameInput::with_default(10, sample_time());
        assert_eq!(input.text(), "2016_10_23");

        assert!(!input.replace_all("bad|name", &notifier));
        assert_eq!(input.text(), "2016_10_23");

        assert!(input.replace_all("report", &notifier));
        assert_eq!(input.text(), "report");
        assert_eq!(notifier.take(), vec![Notice::InvalidCharacter]);
    }
}
