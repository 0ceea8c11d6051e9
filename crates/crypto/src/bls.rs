//! BLS12-381 keys and signatures for `f3`/`t3` accounts
//!
//! Uses the min_pk variant (48-byte G1 public keys, 96-byte G2 signatures)
//! with the ciphersuite Filecoin signs under. Keys derived from a wallet
//! seed go through [`BlsSecretKey::from_seed`]: a ChaCha20 stream keyed by
//! the 32-byte seed supplies the IKM for `KeyGen`, as filecoin-ffi does.

use crate::error::BlsError;
use blst::min_pk::{PublicKey as BlstPubKey, SecretKey as BlstSecKey, Signature as BlstSig};
use blst::BLST_ERROR;
use filwallet_types::{Address, AddressError, Network};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

/// Domain separation tag for message signatures
pub const DST_FILECOIN: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Secret key width
pub const BLS_SECRET_KEY_LEN: usize = 32;

/// Compressed public key width
pub const BLS_PUBLIC_KEY_LEN: usize = 48;

/// Signature width
pub const BLS_SIGNATURE_LEN: usize = 96;

/// BLS12-381 secret key (32 bytes)
#[derive(Clone)]
pub struct BlsSecretKey(BlstSecKey);

impl BlsSecretKey {
    /// Expand 32 bytes of input key material into a secret key
    ///
    /// `KeyGen` with the unhashed `BLS-SIG-KEYGEN-SALT-` salt (draft v3).
    pub fn from_ikm(ikm: &[u8; 32]) -> Result<Self, BlsError> {
        BlstSecKey::key_gen_v3(ikm, &[])
            .map(Self)
            .map_err(|_| BlsError::KeyGeneration)
    }

    /// Generate the key filecoin-ffi produces for a 32-byte seed
    ///
    /// The first 32 bytes of `ChaCha20Rng::from_seed(seed)` are the IKM.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, BlsError> {
        let mut rng = ChaCha20Rng::from_seed(*seed);
        let mut ikm = Zeroizing::new([0u8; 32]);
        rng.fill_bytes(&mut ikm[..]);
        Self::from_ikm(&ikm)
    }

    /// Load from raw bytes (32 bytes big-endian scalar)
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, BlsError> {
        BlstSecKey::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::InvalidSecretKey)
    }

    /// Serialize to bytes (32 bytes big-endian scalar)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Load from the little-endian scalar form used in Lotus key records
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Result<Self, BlsError> {
        let mut be = *bytes;
        be.reverse();
        let key = Self::from_bytes(&be);
        be.zeroize();
        key
    }

    /// Serialize to the little-endian scalar form used in Lotus key records
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut le = self.to_bytes();
        le.reverse();
        le
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> BlsPublicKey {
        BlsPublicKey(self.0.sk_to_pk())
    }

    /// Sign a message. Deterministic: same key and message give the same bytes.
    pub fn sign(&self, msg: &[u8]) -> BlsSignature {
        BlsSignature(self.0.sign(msg, DST_FILECOIN, &[]))
    }
}

impl std::fmt::Debug for BlsSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlsSecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// BLS12-381 public key (48 bytes compressed)
#[derive(Clone, PartialEq, Eq)]
pub struct BlsPublicKey(BlstPubKey);

impl BlsPublicKey {
    /// Load from bytes (48 bytes compressed)
    pub fn from_bytes(bytes: &[u8; 48]) -> Result<Self, BlsError> {
        BlstPubKey::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::InvalidPublicKey)
    }

    /// Serialize to bytes (48 bytes compressed)
    pub fn to_bytes(&self) -> [u8; 48] {
        self.0.to_bytes()
    }

    /// Verify a signature
    pub fn verify(&self, msg: &[u8], sig: &BlsSignature) -> bool {
        sig.0.verify(true, msg, DST_FILECOIN, &[], &self.0, true) == BLST_ERROR::BLST_SUCCESS
    }

    /// `f3`/`t3` address carrying this key
    pub fn address(&self, network: Network) -> Result<Address, AddressError> {
        Address::new_bls(network, &self.to_bytes())
    }
}

impl std::fmt::Debug for BlsPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "BlsPublicKey({})", hex::encode(&bytes[..8]))
    }
}

impl Serialize for BlsPublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(self.to_bytes()))
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for BlsPublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            hex::decode(&s).map_err(serde::de::Error::custom)?
        } else {
            Vec::<u8>::deserialize(deserializer)?
        };
        let arr: [u8; 48] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("invalid public key length"))?;
        Self::from_bytes(&arr).map_err(serde::de::Error::custom)
    }
}

/// BLS12-381 signature (96 bytes)
#[derive(Clone)]
pub struct BlsSignature(BlstSig);

impl BlsSignature {
    /// Load from bytes (96 bytes)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlsError> {
        if bytes.len() != BLS_SIGNATURE_LEN {
            return Err(BlsError::InvalidSignature);
        }
        BlstSig::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::InvalidSignature)
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; 96] {
        self.0.to_bytes()
    }

    /// Verify signature against public key
    pub fn verify(&self, msg: &[u8], pubkey: &BlsPublicKey) -> bool {
        pubkey.verify(msg, self)
    }
}

impl std::fmt::Debug for BlsSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "BlsSignature({})", hex::encode(&bytes[..8]))
    }
}

impl PartialEq for BlsSignature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for BlsSignature {}

/// BLS12-381 key pair
#[derive(Clone, Debug)]
pub struct BlsKeyPair {
    /// Secret key
    pub secret_key: BlsSecretKey,
    /// Public key
    pub public_key: BlsPublicKey,
}

impl BlsKeyPair {
    /// Create from secret key
    pub fn from_secret_key(secret_key: BlsSecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
        }
    }

    /// Sign a message
    pub fn sign(&self, msg: &[u8]) -> BlsSignature {
        self.secret_key.sign(msg)
    }
}
