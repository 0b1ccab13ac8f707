//! # invisible_ink
//!
//! Safely write and read encrypted files, keeping the plaintext invisible to
//! git and to anyone without the key.
//!
//! ## Features
//!
//! - **AES-256-GCM Encryption**: Authenticated encryption, so tampering is detected instead of decrypted
//! - **Editor Workflow**: Decrypt into a private buffer, edit, re-encrypt on save
//! - **Interrupt Safe**: A failed or killed editor never touches the encrypted file
//! - **Key Management**: Key file or environment variable, never both required
//! - **Git Friendly**: `setup` adds the key file to `.gitignore` automatically
//! - **Simple CLI**: Three commands, no configuration files
//!
//! ## Quick Start
//!
//! ### Installation
//!
//! Build from source:
//! ```bash
//! cargo build --release
//! # Binary will be at target/release/invisible_ink
//! ```
//!
//! ### Basic Usage
//!
//! ```bash
//! # Generate a key and teach .gitignore about it
//! invisible_ink setup
//!
//! # Edit an encrypted file (uses $EDITOR)
//! invisible_ink write secrets.md
//!
//! # Print the decrypted contents
//! invisible_ink read secrets.md
//! ```
//!
//! Team members without the key file can use the environment instead:
//! ```bash
//! INVISIBLE_INK_KEY=<32 characters> invisible_ink read secrets.md
//! ```
//!
//! ## How It Works
//!
//! `invisible_ink write` runs an edit session around your editor:
//!
//! 1. **Resolve** the key from `INVISIBLE_INK_KEY` or `invisible_ink.key`
//! 2. **Decrypt** the target file into a temporary buffer (new files start empty)
//! 3. **Edit** the buffer with `$EDITOR`, waiting for it to exit
//! 4. **Re-encrypt** the buffer and atomically replace the target file
//! 5. **Scrub** the buffer: overwritten with zeros, then removed
//!
//! The target file is replaced only after the editor exits successfully. If
//! the editor fails or is killed by a signal, the previous ciphertext stays
//! byte-for-byte intact.
//!
//! ### Data Flow
//!
//! **Writing:**
//! ```text
//! encrypted file → decrypt → temp buffer → $EDITOR → encrypt → encrypted file
//! ```
//!
//! **Reading:**
//! ```text
//! encrypted file → decrypt → stdout
//! ```
//!
//! ## Module Overview
//!
//! - [`crypto`] - AES-256-GCM sealing and opening of file contents
//! - [`key`] - Key resolution, generation, and the key file
//! - [`session`] - The editor session: buffer, spawn, re-encrypt, scrub
//! - [`ignore`] - `.gitignore` bookkeeping for the key file
//! - [`error`] - The error enum every operation returns
//!
//! ## Commands
//!
//! - `write FILE` - Open FILE in your editor, encrypting it on save
//! - `read FILE` - Decrypt FILE and print its contents
//! - `setup` - Generate `invisible_ink.key` and add it to `.gitignore`
//!
//! ## Security Considerations
//!
//! ### Threat Model
//!
//! **Protected against:**
//! - Plaintext secrets committed to the repository
//! - Accidental exposure of the key file via git (`setup` ignores it)
//! - Tampered ciphertext (authentication failure, not garbage output)
//! - Plaintext left behind in temp files after editing
//!
//! **Not protected against:**
//! - A compromised editor or editor plugins
//! - Key extraction from the working directory or environment
//! - Memory inspection while the editor is open
//! - Side-channel attacks
//!
//! ### Best Practices
//!
//! 1. Never commit `invisible_ink.key` (setup enforces this via `.gitignore`)
//! 2. Share the key through a secure channel only
//! 3. Prefer the key file over shell-history-visible environment variables
//! 4. Rotate the key if compromised: re-encrypt files under a new key
//!
//! ## Cryptography Details
//!
//! - **Algorithm**: AES-256-GCM (Galois/Counter Mode)
//! - **Key size**: 256 bits (32 bytes)
//! - **Nonce size**: 96 bits (12 bytes), randomly generated per encryption
//! - **Authentication**: Built into GCM mode (16-byte tag)
//!
//! ### Encrypted File Format
//!
//! ```text
//! [INVISINK][12-byte nonce][variable-length ciphertext + 16-byte GCM tag]
//! ```
//!
//! The magic header makes encrypted files self-identifying and leaves room
//! for future format versions.
//!
//! ## Testing
//!
//! Run all unit tests:
//! ```bash
//! cargo test --lib
//! ```
//!
//! - **Crypto module** ([`crypto`]): Round-trips, authentication, malformed input
//! - **Key management** ([`key`]): Resolution order, permissions, no-clobber creation
//! - **Editor session** ([`session`]): Exit classification, atomicity, buffer scrubbing
//! - **Ignore file** ([`ignore`]): Append formats, duplicate detection
//!
//! Run the CLI integration tests:
//! ```bash
//! cargo test --test cli_test --test write_test --test setup_test
//! ```
//!
//! ## Security Testing
//!
//! Tests verify security properties:
//! - ✅ Authentication (a wrong key is an error, not garbage output)
//! - ✅ Tamper detection (corrupted ciphertext rejected)
//! - ✅ File permissions (0600 on Unix)
//! - ✅ Buffer scrubbing (zeros before removal)
//! - ✅ Atomicity (interrupted editors leave ciphertext untouched)

// Library exports for testing
pub mod crypto;
pub mod error;
pub mod ignore;
pub mod key;
pub mod session;

// Re-export commonly used types
pub use crypto::EncryptionKey;
pub use error::{InvisibleInkError, Result};
pub use ignore::IgnoreFile;
pub use key::KeyStore;
pub use session::EditSession;
