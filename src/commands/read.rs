use crate::error::Result;
use crate::key::KeyStore;
use crate::session::EditSession;
use std::io::{self, Write};
use std::path::Path;

/// Decrypt a file and print its contents
pub fn read(file: &Path) -> Result<()> {
    let key = KeyStore::new(".").resolve_key()?;
    let session = EditSession::new(file, key);

    let plaintext = session.read()?;

    // Exactly one trailing newline, even for empty contents
    let mut stdout = io::stdout().lock();
    stdout.write_all(&plaintext)?;
    if !plaintext.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}
