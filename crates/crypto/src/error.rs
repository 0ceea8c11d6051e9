//! Cryptographic error types

use crate::mnemonic::MnemonicError;
use filwallet_types::{Address, AddressError, KeyInfoError, MessageError};
use thiserror::Error;

/// Result type for the signing core
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors surfaced by derivation, export and signing
///
/// Every operation either succeeds completely or returns one of these; there
/// is no partial result and nothing is retried.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Seed phrase or derivation path rejected
    #[error("derivation failed: {0}")]
    Derivation(#[from] MnemonicError),

    /// Key material does not have the scheme's fixed width
    #[error("invalid private key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Width required by the scheme
        expected: usize,
        /// Width supplied
        actual: usize,
    },

    /// Signing primitive rejected its input
    #[error("signing failed: {0}")]
    Signing(String),

    /// Key record or message could not be encoded
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Public key could not be turned into an address
    #[error("address encoding failed: {0}")]
    AddressEncoding(#[from] AddressError),

    /// Invalid secret key bytes
    #[error("invalid secret key bytes")]
    InvalidSecretKey,

    /// Invalid public key bytes
    #[error("invalid public key bytes")]
    InvalidPublicKey,

    /// Invalid signature bytes
    #[error("invalid signature bytes")]
    InvalidSignature,

    /// Signature does not verify for the given signer
    #[error("signature verification failed")]
    VerificationFailed,

    /// Derived account does not own the message sender address
    #[error("sender {sender} is not owned by derived account {derived}")]
    SenderMismatch {
        /// `message.from`
        sender: Address,
        /// Address of the derived key on the sender's network
        derived: Address,
    },
}

impl From<KeyInfoError> for CryptoError {
    fn from(err: KeyInfoError) -> Self {
        CryptoError::Serialization(err.to_string())
    }
}

impl From<MessageError> for CryptoError {
    fn from(err: MessageError) -> Self {
        CryptoError::Serialization(err.to_string())
    }
}

impl From<BlsError> for CryptoError {
    fn from(err: BlsError) -> Self {
        match err {
            BlsError::InvalidSecretKey => CryptoError::InvalidSecretKey,
            BlsError::InvalidPublicKey => CryptoError::InvalidPublicKey,
            BlsError::InvalidSignature => CryptoError::InvalidSignature,
            BlsError::VerificationFailed => CryptoError::VerificationFailed,
            BlsError::KeyGeneration => CryptoError::Signing(err.to_string()),
        }
    }
}

/// BLS12-381 primitive errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlsError {
    /// Invalid secret key bytes
    #[error("invalid secret key bytes")]
    InvalidSecretKey,

    /// Invalid public key bytes
    #[error("invalid public key bytes")]
    InvalidPublicKey,

    /// Invalid signature bytes
    #[error("invalid signature bytes")]
    InvalidSignature,

    /// Signature verification failed
    #[error("signature verification failed")]
    VerificationFailed,

    /// Key generation rejected the input key material
    #[error("key generation rejected input key material")]
    KeyGeneration,
}
