//! Secp256k1 keys and recoverable signatures for `f1`/`t1` accounts
//!
//! This module provides:
//! - Address derivation (blake2b-160 of the 65-byte uncompressed public key)
//! - Deterministic (RFC 6979) ECDSA over a caller-supplied 32-byte digest
//! - Recoverable `r || s || v` signatures, verified by recovering the signer
//!
//! The digest is signed as-is; no hashing is applied here.

use crate::error::CryptoError;
use filwallet_types::{Address, AddressError, Network};
use k256::{
    ecdsa::{
        signature::hazmat::PrehashVerifier, RecoveryId, Signature as K256Signature, SigningKey,
        VerifyingKey,
    },
    elliptic_curve::sec1::ToEncodedPoint,
    SecretKey as K256SecretKey,
};

/// Secret scalar width
pub const SECP256K1_SECRET_KEY_LEN: usize = 32;

/// Digest width accepted for signing
pub const SECP256K1_DIGEST_LEN: usize = 32;

/// Recoverable signature width (`r || s || v`)
pub const SECP256K1_SIGNATURE_LEN: usize = 65;

/// Secp256k1 secret key (32 bytes scalar)
#[derive(Clone)]
pub struct Secp256k1SecretKey(K256SecretKey);

impl Secp256k1SecretKey {
    /// Load from raw bytes (32 bytes big-endian scalar)
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        K256SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidSecretKey)
    }

    /// Serialize to bytes (32 bytes scalar, leading zeros kept)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(self.0.public_key())
    }

    /// Sign a 32-byte digest
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Secp256k1Signature, CryptoError> {
        if digest.len() != SECP256K1_DIGEST_LEN {
            return Err(CryptoError::Signing(format!(
                "digest must be {} bytes, got {}",
                SECP256K1_DIGEST_LEN,
                digest.len()
            )));
        }
        let signing_key = SigningKey::from(&self.0);
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        Ok(Secp256k1Signature {
            signature,
            recovery_id,
        })
    }
}

impl std::fmt::Debug for Secp256k1SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Secp256k1 public key
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PublicKey(k256::PublicKey);

impl Secp256k1PublicKey {
    /// Load from SEC1 bytes (33 compressed or 65 uncompressed)
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        k256::PublicKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Serialize to compressed bytes (33 bytes)
    pub fn to_bytes(&self) -> [u8; 33] {
        let encoded = self.0.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// Serialize to uncompressed bytes (65 bytes: `0x04 || X || Y`)
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let encoded = self.0.to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// `f1`/`t1` address of this key
    pub fn address(&self, network: Network) -> Result<Address, AddressError> {
        Address::new_secp256k1(network, &self.to_uncompressed_bytes())
    }

    /// Verify a signature over a 32-byte digest
    pub fn verify(&self, digest: &[u8], sig: &Secp256k1Signature) -> bool {
        VerifyingKey::from(&self.0)
            .verify_prehash(digest, &sig.signature)
            .is_ok()
    }
}

impl std::fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Secp256k1PublicKey({})", hex::encode(&bytes[..8]))
    }
}

/// Recoverable ECDSA signature
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1Signature {
    signature: K256Signature,
    recovery_id: RecoveryId,
}

impl Secp256k1Signature {
    /// Load from bytes (65 bytes: `r || s || v`)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SECP256K1_SIGNATURE_LEN {
            return Err(CryptoError::InvalidSignature);
        }
        let signature =
            K256Signature::from_slice(&bytes[..64]).map_err(|_| CryptoError::InvalidSignature)?;
        let recovery_id = RecoveryId::from_byte(bytes[64]).ok_or(CryptoError::InvalidSignature)?;
        Ok(Self {
            signature,
            recovery_id,
        })
    }

    /// Serialize to bytes (65 bytes: `r || s || v`)
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&self.signature.to_bytes());
        out[64] = self.recovery_id.to_byte();
        out
    }

    /// Recover the signer's public key from the digest
    pub fn recover(&self, digest: &[u8]) -> Result<Secp256k1PublicKey, CryptoError> {
        let verifying_key =
            VerifyingKey::recover_from_prehash(digest, &self.signature, self.recovery_id)
                .map_err(|_| CryptoError::VerificationFailed)?;
        Ok(Secp256k1PublicKey(k256::PublicKey::from(&verifying_key)))
    }

    /// Verify signature against public key
    pub fn verify(&self, digest: &[u8], pubkey: &Secp256k1PublicKey) -> bool {
        pubkey.verify(digest, self)
    }
}

impl std::fmt::Debug for Secp256k1Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Secp256k1Signature({})", hex::encode(&bytes[..8]))
    }
}

/// Secp256k1 key pair
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    /// Secret key
    pub secret_key: Secp256k1SecretKey,
    /// Public key
    pub public_key: Secp256k1PublicKey,
}

impl Secp256k1KeyPair {
    /// Create from secret key
    pub fn from_secret_key(secret_key: Secp256k1SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
        }
    }

    /// Sign a 32-byte digest
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Secp256k1Signature, CryptoError> {
        self.secret_key.sign_digest(digest)
    }
}

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}
