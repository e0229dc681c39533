use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SaveError;
use crate::export::filename::ValidFilename;

/// `<root>/<directory>`, with surrounding whitespace trimmed from the name.
pub fn export_dir(root: &Path, directory_name: &str) -> PathBuf {
    root.join(directory_name.trim())
}

/// Write `lines` to `<root>/<directory>/<name>.txt`, one line per row.
///
/// The directory is created on demand. An existing file is never opened for
/// writing; the path is claimed with an exclusive create so a collision
/// leaves the old contents untouched. A failure mid-write leaves whatever
/// reached the disk in place.
pub fn save_lines<S: AsRef<str>>(
    root: &Path,
    directory_name: &str,
    filename: &ValidFilename,
    lines: &[S],
) -> Result<PathBuf, SaveError> {
    let dir = export_dir(root, directory_name);
    fs::create_dir_all(&dir)?;

    let path = dir.join(filename.file_name());
    let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(SaveError::AlreadyExists(path));
        }
        Err(e) => return Err(SaveError::Io(e)),
    };

    let mut out = BufWriter::new(file);
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::export::filename::validate_filename;

    fn name(s: &str) -> ValidFilename {
        validate_filename(s, 64).unwrap()
    }

    #[test]
    fn test_writes_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = save_lines(dir.path(), "exports", &name("list"), &["one", "two", "three"]).unwrap();

        assert_eq!(path, dir.path().join("exports").join("list.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_trims_directory_and_creates_parents() {
        let dir = tempdir().unwrap();
        let path = save_lines(dir.path(), "  a/b  ", &name("x"), &["1"]).unwrap();
        assert_eq!(path, dir.path().join("a").join("b").join("x.txt"));
        assert!(path.is_file());
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "original\n").unwrap();

        let err = save_lines(dir.path(), "exports", &name("keep"), &["new"]).unwrap_err();
        assert!(matches!(err, SaveError::AlreadyExists(ref p) if p == &target.join("keep.txt")));
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "original\n");
    }

    #[test]
    fn test_directory_blocked_by_file_is_io_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("exports"), "not a dir").unwrap();

        let err = save_lines(dir.path(), "exports", &name("x"), &["1"]).unwrap_err();
        assert!(matches!(err, SaveError::Io(_)));
    }

    #[test]
    fn test_empty_lines_keep_their_rows() {
        let dir = tempdir().unwrap();
        let lines = vec![String::new(), "b".to_string(), String::new()];
        let path = save_lines(dir.path(), "d", &name("gaps"), &lines[..]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "\nb\n\n");
    }
}
