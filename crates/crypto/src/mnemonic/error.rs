//! Error types for phrase parsing and path derivation

use thiserror::Error;

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Errors that can occur while turning a phrase into key material
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Invalid mnemonic phrase (wrong word count, unknown word or bad checksum)
    #[error("invalid mnemonic phrase: {0}")]
    InvalidPhrase(String),

    /// Passphrase is too long
    #[error("passphrase is too long (max {max} bytes)")]
    PassphraseTooLong {
        /// Accepted maximum
        max: usize,
    },

    /// BIP-32 master key or child derivation failed
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    /// Invalid derivation path or account index
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
}

impl From<bip39::Error> for MnemonicError {
    fn from(err: bip39::Error) -> Self {
        MnemonicError::InvalidPhrase(err.to_string())
    }
}

impl From<bip32::Error> for MnemonicError {
    fn from(err: bip32::Error) -> Self {
        MnemonicError::DerivationFailed(err.to_string())
    }
}
