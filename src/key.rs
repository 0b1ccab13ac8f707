//! # Key Management
//!
//! Key lookup and creation for invisible_ink.
//!
//! ## Key Sources
//!
//! The encryption key is resolved from two places, in order:
//!
//! 1. **`INVISIBLE_INK_KEY` environment variable**: used verbatim when set
//!    and non-empty
//! 2. **`invisible_ink.key` file** in the working directory: read
//!    byte-for-byte, without trimming
//!
//! A key from either source must be exactly 32 bytes. When neither source is
//! available the caller gets [`InvisibleInkError::MissingKey`], whose message
//! lists every way to provide a key.
//!
//! ## Key File
//!
//! - **Format**: 32 ASCII hex characters, no trailing newline
//! - **Permissions**: 0600 on Unix (owner read/write only)
//! - **Never committed**: `setup` records it in `.gitignore`
//!
//! [`KeyStore::create_key`] writes through a temporary file in the same
//! directory and refuses to replace an existing key file, so a second
//! `setup` can never silently rotate a team's key.

use crate::crypto::EncryptionKey;
use crate::error::{InvisibleInkError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the key file looked up in the working directory.
pub const KEY_FILE_NAME: &str = "invisible_ink.key";

/// Environment variable consulted before the key file.
pub const KEY_ENV_VAR: &str = "INVISIBLE_INK_KEY";

/// Key lookup and creation rooted at a working directory.
pub struct KeyStore {
    dir: PathBuf,
}

impl KeyStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the key file.
    pub fn key_path(&self) -> PathBuf {
        self.dir.join(KEY_FILE_NAME)
    }

    /// Resolve the encryption key from the environment or the key file.
    ///
    /// A non-empty `INVISIBLE_INK_KEY` wins over the key file; an empty
    /// variable counts as unset.
    pub fn resolve_key(&self) -> Result<EncryptionKey> {
        if let Some(value) = Self::env_key() {
            return EncryptionKey::from_bytes(value.as_bytes());
        }

        match fs::read(self.key_path()) {
            Ok(bytes) => EncryptionKey::from_bytes(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(InvisibleInkError::MissingKey)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Generate a new key and write it to the key file.
    ///
    /// The key lands on disk through a temporary file persisted without
    /// clobbering, so an existing key file survives even a concurrent setup.
    pub fn create_key(&self) -> Result<EncryptionKey> {
        let key = EncryptionKey::generate();

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(key.as_bytes())?;
        tmp.as_file().sync_all()?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        match tmp.persist_noclobber(self.key_path()) {
            Ok(_) => Ok(key),
            Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(InvisibleInkError::KeyAlreadyExists)
            }
            Err(e) => Err(e.error.into()),
        }
    }

    fn env_key() -> Option<String> {
        std::env::var(KEY_ENV_VAR).ok().filter(|v| !v.is_empty())
    }
}
