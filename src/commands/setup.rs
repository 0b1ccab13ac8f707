use crate::error::Result;
use crate::ignore::IgnoreFile;
use crate::key::KeyStore;

/// Generate a key file and record it in .gitignore
pub fn setup() -> Result<()> {
    println!("Setting up invisible_ink...");

    // Generate the key first; nothing else changes if this fails
    let store = KeyStore::new(".");
    store.create_key()?;
    println!("Generated new encryption key in invisible_ink.key");

    let ignore = IgnoreFile::new(".");
    if ignore.ensure_ignored()? {
        println!("Added invisible_ink.key to .gitignore");
    } else {
        println!(".gitignore already lists invisible_ink.key");
    }

    println!("\nSetup complete!");
    println!("\nNext steps:");
    println!("1. Share invisible_ink.key with your team through a secure channel");
    println!("2. Run 'invisible_ink write <file>' to create your first encrypted file");

    Ok(())
}
