use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvisibleInkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error(
        "Missing encryption key to decrypt the file. Ask your team for the key and \
         write it to invisible_ink.key, set the INVISIBLE_INK_KEY environment variable, \
         or run 'invisible_ink setup' to generate a new one"
    )]
    MissingKey,

    #[error("invisible_ink.key already exists. Refusing to overwrite it")]
    KeyAlreadyExists,

    #[error("Encryption key must be exactly 32 bytes, but {0} were provided")]
    InvalidKeyLength(usize),

    #[error("Could not decrypt file: invalid ciphertext or wrong key")]
    Decryption,

    #[error("No editor configured. Set the EDITOR environment variable")]
    NoEditor,

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor exited with status {0}; the encrypted file was not updated")]
    EditorFailed(i32),

    #[error("Editor was terminated by signal {0}; the encrypted file was not updated")]
    EditorInterrupted(i32),
}

pub type Result<T> = std::result::Result<T, InvisibleInkError>;
