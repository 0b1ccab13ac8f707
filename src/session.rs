//! # Editor Session
//!
//! The edit workflow behind `invisible_ink write`:
//!
//! 1. Resolve the editor from `EDITOR` (whitespace-split into a program and
//!    its arguments)
//! 2. Decrypt the current contents, or start from empty for a new file
//! 3. Write the plaintext to a private temporary buffer
//! 4. Run the editor on the buffer and wait for it to finish
//! 5. Re-encrypt the buffer and atomically replace the target file
//!
//! The target file is only replaced after the editor exits successfully, so
//! a failed or interrupted editor leaves the previous ciphertext exactly as
//! it was. The plaintext buffer lives in the system temp directory with
//! owner-only permissions on Unix, and is zero-overwritten and removed when
//! the session ends, on success and on error alike.

use crate::crypto::EncryptionKey;
use crate::error::{InvisibleInkError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tempfile::{Builder, NamedTempFile};

/// Environment variable naming the editor command.
pub const EDITOR_ENV_VAR: &str = "EDITOR";

/// One encrypted file plus the key that opens it.
pub struct EditSession {
    path: PathBuf,
    key: EncryptionKey,
}

impl EditSession {
    pub fn new(path: impl AsRef<Path>, key: EncryptionKey) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            key,
        }
    }

    /// Decrypt the file and return its plaintext.
    ///
    /// A file that does not exist reads the same as one that cannot be
    /// decrypted, so callers learn nothing about which of the two it was.
    pub fn read(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(data) => self.key.decrypt(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(InvisibleInkError::Decryption)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Run the configured editor over the decrypted contents and re-encrypt
    /// the result.
    pub fn edit(&self) -> Result<()> {
        let (program, args) = resolve_editor()?;
        let current = self.current_plaintext()?;

        let buffer = EditBuffer::create(&self.path, &current)?;

        let status = Command::new(&program)
            .args(&args)
            .arg(buffer.path())
            .status()
            .map_err(|source| InvisibleInkError::EditorLaunch {
                editor: program.clone(),
                source,
            })?;

        classify_exit(status)?;

        // Read back by path: editors commonly save via rename-replace
        let updated = buffer.read_back()?;
        let ciphertext = self.key.encrypt(&updated)?;
        self.replace_with(&ciphertext)?;

        Ok(())
    }

    /// Plaintext to seed the edit buffer with. A missing file starts empty.
    fn current_plaintext(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(data) => self.key.decrypt(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace the target file with new ciphertext.
    fn replace_with(&self, data: &[u8]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

/// Temporary plaintext buffer handed to the editor.
///
/// The buffer name carries the target's file name so editors can pick up
/// syntax highlighting and show something recognizable in their title bar.
struct EditBuffer {
    file: NamedTempFile,
}

impl EditBuffer {
    fn create(target: &Path, contents: &[u8]) -> Result<Self> {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("contents"));
        let suffix = format!("-{}", name);

        let mut file = Builder::new()
            .prefix("invisible_ink-")
            .suffix(&suffix)
            .tempfile()?;

        file.write_all(contents)?;
        file.flush()?;

        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn read_back(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.file.path())?)
    }
}

impl Drop for EditBuffer {
    fn drop(&mut self) {
        // Overwrite the plaintext before the temp file is unlinked
        let _ = scrub(self.file.path());
    }
}

fn scrub(path: &Path) -> std::io::Result<()> {
    let len = fs::metadata(path)?.len();
    let mut file = fs::OpenOptions::new().write(true).open(path)?;
    file.write_all(&vec![0u8; len as usize])?;
    file.sync_all()
}

/// Split `EDITOR` into a program and its arguments.
fn resolve_editor() -> Result<(String, Vec<String>)> {
    let raw = std::env::var(EDITOR_ENV_VAR).unwrap_or_default();
    let mut parts = raw.split_whitespace().map(str::to_owned);

    match parts.next() {
        Some(program) => Ok((program, parts.collect())),
        None => Err(InvisibleInkError::NoEditor),
    }
}

fn classify_exit(status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(InvisibleInkError::EditorInterrupted(signal));
        }
    }

    Err(InvisibleInkError::EditorFailed(status.code().unwrap_or(-1)))
}
