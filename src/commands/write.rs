use crate::error::Result;
use crate::key::KeyStore;
use crate::session::EditSession;
use std::path::Path;

/// Edit a file through the configured editor, encrypting on save
pub fn write(file: &Path) -> Result<()> {
    // Resolve the key up front so a missing key never opens an editor
    let key = KeyStore::new(".").resolve_key()?;

    let session = EditSession::new(file, key);
    session.edit()?;

    println!("Wrote encrypted contents to {}", file.display());

    Ok(())
}
