//! Key derivation and signing for Filecoin wallets
//!
//! This crate provides:
//! - BIP-39/BIP-32 derivation along `m/44'/461'/0'/0/<account>`
//! - secp256k1 keys (`f1` addresses, recoverable ECDSA signatures)
//! - BLS12-381 keys (`f3` addresses, min_pk signatures)
//! - Lotus-compatible key record export
//! - Message signing dispatched on the sender address protocol
//!
//! Seed phrases and key material are zeroized on drop and never logged.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod bls;
pub mod error;
pub mod keys;
pub mod mnemonic;
pub mod secp256k1;
pub mod secure;
pub mod signer;
pub mod wallet;

// BLS12-381 exports
pub use bls::{BlsKeyPair, BlsPublicKey, BlsSecretKey, BlsSignature, DST_FILECOIN};

// Secp256k1 exports
pub use secp256k1::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1SecretKey, Secp256k1Signature};

// Scheme-tagged keys
pub use keys::{address_for, export_key, KeyScheme, PrivateKey, PublicKey};

// Error exports
pub use error::{BlsError, CryptoError, CryptoResult};

// Secure memory exports
pub use secure::{DerivationInfo, DerivedKeyMaterial, SecretArray, SecretString};

// Mnemonic exports
pub use mnemonic::{
    derive, derive_address, derive_key_material, derive_keys, DerivationConfig, Mnemonic, MnemonicError,
    DEFAULT_DERIVATION_PATH, FILECOIN_COIN_TYPE,
};

// Signing exports
pub use signer::{
    sign_digest, sign_digest_with_key_bytes, verify_signature, verify_signed_message,
};
