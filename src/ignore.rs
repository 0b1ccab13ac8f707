use crate::error::Result;
use crate::key::KEY_FILE_NAME;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// `.gitignore` bookkeeping for the key file.
pub struct IgnoreFile {
    dir: PathBuf,
}

impl IgnoreFile {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the ignore file
    pub fn path(&self) -> PathBuf {
        self.dir.join(IGNORE_FILE_NAME)
    }

    /// Make sure the key file name is listed in `.gitignore`.
    ///
    /// Returns `true` when an entry was added and `false` when one already
    /// existed. The file is created when absent; existing entries are kept
    /// untouched, and a missing final newline is repaired before appending.
    pub fn ensure_ignored(&self) -> Result<bool> {
        let path = self.path();

        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        // Whole-line match only: "my_invisible_ink.key" does not count
        if existing.lines().any(|line| line == KEY_FILE_NAME) {
            return Ok(false);
        }

        let mut updated = existing;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(KEY_FILE_NAME);
        updated.push('\n');

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(updated.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        Ok(true)
    }
}
