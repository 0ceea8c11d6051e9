//! Scheme-tagged keys for Filecoin accounts
//!
//! Filecoin accounts sign under one of two schemes:
//! - secp256k1: `f1`/`t1` addresses, 65-byte recoverable signatures
//! - BLS12-381: `f3`/`t3` addresses, 96-byte signatures
//!
//! [`PrivateKey`] and [`PublicKey`] carry the scheme in their variant, so
//! the signature tag, key record type and address protocol always follow
//! from the key itself.

use crate::bls::{BlsPublicKey, BlsSecretKey};
use crate::error::{CryptoError, CryptoResult};
use crate::secp256k1::{Secp256k1PublicKey, Secp256k1SecretKey};
use filwallet_types::{
    Address, KeyInfo, KeyType, Network, Protocol, SigType, Signature, PRIVATE_KEY_LEN,
};
use std::fmt;
use zeroize::Zeroizing;

/// Signature scheme of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScheme {
    /// ECDSA over secp256k1
    Secp256k1,
    /// BLS12-381 (min_pk)
    Bls,
}

impl KeyScheme {
    /// Scheme that signs for an address
    ///
    /// BLS addresses select BLS; every other protocol selects secp256k1.
    pub fn for_protocol(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Bls => KeyScheme::Bls,
            Protocol::Id | Protocol::Secp256k1 | Protocol::Actor => KeyScheme::Secp256k1,
        }
    }

    /// Key record type tag
    pub fn key_type(self) -> KeyType {
        match self {
            KeyScheme::Secp256k1 => KeyType::Secp256k1,
            KeyScheme::Bls => KeyType::Bls,
        }
    }

    /// Signature type tag
    pub fn sig_type(self) -> SigType {
        match self {
            KeyScheme::Secp256k1 => SigType::Secp256k1,
            KeyScheme::Bls => SigType::Bls,
        }
    }

    /// Address protocol of keys under this scheme
    pub fn protocol(self) -> Protocol {
        match self {
            KeyScheme::Secp256k1 => Protocol::Secp256k1,
            KeyScheme::Bls => Protocol::Bls,
        }
    }
}

impl From<KeyType> for KeyScheme {
    fn from(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Secp256k1 => KeyScheme::Secp256k1,
            KeyType::Bls => KeyScheme::Bls,
        }
    }
}

impl From<SigType> for KeyScheme {
    fn from(sig_type: SigType) -> Self {
        match sig_type {
            SigType::Secp256k1 => KeyScheme::Secp256k1,
            SigType::Bls => KeyScheme::Bls,
        }
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key_type(), f)
    }
}

/// Private key of either scheme
#[derive(Debug)]
pub enum PrivateKey {
    /// secp256k1 scalar
    Secp256k1(Secp256k1SecretKey),
    /// BLS12-381 secret key
    Bls(BlsSecretKey),
}

impl PrivateKey {
    /// Load from key record bytes
    ///
    /// secp256k1 bytes are the big-endian scalar; BLS bytes are the
    /// little-endian scalar Lotus stores. Both must be exactly 32 bytes.
    pub fn from_bytes(key_type: KeyType, bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut fixed = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        fixed.copy_from_slice(bytes);

        match key_type {
            KeyType::Secp256k1 => Ok(PrivateKey::Secp256k1(Secp256k1SecretKey::from_bytes(
                &fixed,
            )?)),
            KeyType::Bls => Ok(PrivateKey::Bls(BlsSecretKey::from_le_bytes(&fixed)?)),
        }
    }

    /// Key record bytes (inverse of [`PrivateKey::from_bytes`])
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        match self {
            PrivateKey::Secp256k1(sk) => sk.to_bytes(),
            PrivateKey::Bls(sk) => sk.to_le_bytes(),
        }
    }

    /// Signature scheme of this key
    pub fn scheme(&self) -> KeyScheme {
        match self {
            PrivateKey::Secp256k1(_) => KeyScheme::Secp256k1,
            PrivateKey::Bls(_) => KeyScheme::Bls,
        }
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Secp256k1(sk) => PublicKey::Secp256k1(sk.public_key()),
            PrivateKey::Bls(sk) => PublicKey::Bls(sk.public_key()),
        }
    }

    /// Account address of this key
    pub fn address(&self, network: Network) -> CryptoResult<Address> {
        self.public_key().address(network)
    }

    /// Tagged key record
    pub fn to_key_info(&self) -> KeyInfo {
        let bytes = Zeroizing::new(self.to_bytes());
        KeyInfo::new(self.scheme().key_type(), *bytes)
    }

    /// Key record in the hex-of-JSON transport form
    pub fn export_hex(&self) -> CryptoResult<String> {
        Ok(self.to_key_info().to_hex()?)
    }

    /// Sign a digest; the signature tag is this key's scheme
    ///
    /// secp256k1 requires a 32-byte digest. BLS signs any byte string.
    pub fn sign(&self, digest: &[u8]) -> CryptoResult<Signature> {
        match self {
            PrivateKey::Secp256k1(sk) => {
                let sig = sk.sign_digest(digest)?;
                Ok(Signature::new_secp256k1(sig.to_bytes()))
            }
            PrivateKey::Bls(sk) => Ok(Signature::new_bls(sk.sign(digest).to_bytes())),
        }
    }
}

impl TryFrom<&KeyInfo> for PrivateKey {
    type Error = CryptoError;

    fn try_from(key_info: &KeyInfo) -> Result<Self, Self::Error> {
        Self::from_bytes(key_info.key_type(), key_info.private_key())
    }
}

/// Public key of either scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// secp256k1 point
    Secp256k1(Secp256k1PublicKey),
    /// BLS12-381 G1 point
    Bls(BlsPublicKey),
}

impl PublicKey {
    /// Signature scheme of this key
    pub fn scheme(&self) -> KeyScheme {
        match self {
            PublicKey::Secp256k1(_) => KeyScheme::Secp256k1,
            PublicKey::Bls(_) => KeyScheme::Bls,
        }
    }

    /// Bytes an address is built from: 65-byte uncompressed secp256k1 point
    /// or 48-byte compressed BLS point
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Secp256k1(pk) => pk.to_uncompressed_bytes().to_vec(),
            PublicKey::Bls(pk) => pk.to_bytes().to_vec(),
        }
    }

    /// Account address of this key
    pub fn address(&self, network: Network) -> CryptoResult<Address> {
        let address = match self {
            PublicKey::Secp256k1(pk) => pk.address(network)?,
            PublicKey::Bls(pk) => pk.address(network)?,
        };
        Ok(address)
    }
}

/// Account address of a private key
pub fn address_for(private_key: &PrivateKey, network: Network) -> CryptoResult<Address> {
    private_key.address(network)
}

/// Export a private key as a hex-encoded key record
pub fn export_key(private_key: &PrivateKey) -> CryptoResult<String> {
    private_key.export_hex()
}
