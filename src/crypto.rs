//! # Cryptographic Operations
//!
//! Authenticated encryption and decryption for invisible_ink files using
//! AES-256-GCM.
//!
//! ## Algorithm
//!
//! - **Cipher**: AES-256-GCM (Galois/Counter Mode)
//! - **Key size**: 256 bits (32 bytes)
//! - **Nonce size**: 96 bits (12 bytes), randomly generated per encryption
//! - **Authentication**: Built into GCM mode (16-byte tag)
//!
//! ## Encrypted Data Format
//!
//! ```text
//! [INVISINK][12-byte nonce][variable-length ciphertext + 16-byte GCM tag]
//! ```
//!
//! The magic header makes encrypted files self-identifying and leaves room
//! for future format versions.
//!
//! ## Keys
//!
//! Generated keys are 16 random bytes rendered as 32 lowercase hexadecimal
//! characters, so a key can be copied into an environment variable or stored
//! in a plain text file. The 32 rendered bytes are used directly as the
//! AES-256 key material; any other length is rejected. Key bytes are
//! zeroized when an [`EncryptionKey`] is dropped and never appear in debug
//! output.

use crate::error::{InvisibleInkError, Result};
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use zeroize::ZeroizeOnDrop;

pub const KEY_SIZE: usize = 32; // 256 bits
pub const NONCE_SIZE: usize = 12; // 96 bits for GCM

// Magic header identifying invisible_ink ciphertext
const MAGIC_HEADER: &[u8] = b"INVISINK";

#[derive(Clone, ZeroizeOnDrop)]
pub struct EncryptionKey {
    key: [u8; KEY_SIZE],
}

impl EncryptionKey {
    /// Generate a new random key, rendered as 32 hex characters.
    pub fn generate() -> Self {
        let mut raw = [0u8; KEY_SIZE / 2];
        OsRng.fill_bytes(&mut raw);

        let rendered = hex::encode(raw);
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(rendered.as_bytes());
        Self { key }
    }

    /// Create a key from existing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(InvisibleInkError::InvalidKeyLength(bytes.len()));
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Get the key as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Encrypt data.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| InvisibleInkError::Crypto(e.to_string()))?;

        // Generate random nonce
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| InvisibleInkError::Crypto(e.to_string()))?;

        // Format: MAGIC_HEADER + nonce + ciphertext
        let mut result = Vec::with_capacity(MAGIC_HEADER.len() + NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(MAGIC_HEADER);
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypt data.
    ///
    /// Every failure mode collapses into the same
    /// [`InvisibleInkError::Decryption`] value: callers cannot distinguish a
    /// wrong key from corrupt or truncated input.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let min_size = MAGIC_HEADER.len() + NONCE_SIZE;
        if data.len() < min_size || &data[..MAGIC_HEADER.len()] != MAGIC_HEADER {
            return Err(InvisibleInkError::Decryption);
        }

        let cipher =
            Aes256Gcm::new_from_slice(&self.key).map_err(|_| InvisibleInkError::Decryption)?;

        let body = &data[MAGIC_HEADER.len()..];
        let (nonce_bytes, ciphertext) = body.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| InvisibleInkError::Decryption)
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
