//! Blake2b hashing used by the Filecoin address and message formats.

use blake2::digest::consts::{U20, U32, U4};
use blake2::{Blake2b, Digest};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

type Blake2b256 = Blake2b<U32>;
type Blake2b160 = Blake2b<U20>;
type Blake2b32 = Blake2b<U4>;

/// Length of an address payload hash (blake2b-160).
pub const PAYLOAD_HASH_LEN: usize = 20;

/// Length of an address checksum (blake2b-32).
pub const CHECKSUM_LEN: usize = 4;

/// blake2b-160 of `data`, used for secp256k1 and actor address payloads.
pub fn blake2b_160(data: &[u8]) -> [u8; PAYLOAD_HASH_LEN] {
    let mut out = [0u8; PAYLOAD_HASH_LEN];
    out.copy_from_slice(&Blake2b160::digest(data));
    out
}

/// blake2b-32 checksum over `protocol || payload`.
pub fn address_checksum(protocol: u8, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b32::new();
    hasher.update([protocol]);
    hasher.update(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Width of a message digest
pub const MESSAGE_DIGEST_LEN: usize = 32;

/// blake2b-256 digest of an encoded message
///
/// Hex in human-readable formats, 32 raw bytes otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageDigest([u8; MESSAGE_DIGEST_LEN]);

impl MessageDigest {
    /// Hash `data`
    pub fn compute(data: &[u8]) -> Self {
        let mut bytes = [0u8; MESSAGE_DIGEST_LEN];
        bytes.copy_from_slice(&Blake2b256::digest(data));
        Self(bytes)
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8; MESSAGE_DIGEST_LEN] {
        &self.0
    }

    /// Digest bytes as a slice, the form signers take
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MESSAGE_DIGEST_LEN]> for MessageDigest {
    fn from(bytes: [u8; MESSAGE_DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for MessageDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for MessageDigest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; MESSAGE_DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for MessageDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for MessageDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        } else {
            <[u8; MESSAGE_DIGEST_LEN]>::deserialize(deserializer).map(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let a = MessageDigest::compute(b"test data");
        assert_eq!(a, MessageDigest::compute(b"test data"));
        assert_ne!(a, MessageDigest::default());
        assert_ne!(a, MessageDigest::compute(b"test datb"));
    }

    #[test]
    fn test_digest_text_round_trip() {
        let digest = MessageDigest::compute(b"test");
        let text = digest.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<MessageDigest>().unwrap(), digest);

        assert!("abcd".parse::<MessageDigest>().is_err());
        assert!("zz".repeat(32).parse::<MessageDigest>().is_err());
    }

    #[test]
    fn test_blake2b_known_vector() {
        // blake2b-160("x")
        assert_eq!(
            hex::encode(blake2b_160(b"x")),
            "04087cb4c58f389c80bef882e3392f1b3b0e9e3c"
        );
    }

    #[test]
    fn test_checksum_depends_on_protocol() {
        let payload = [7u8; 20];
        assert_ne!(address_checksum(1, &payload), address_checksum(2, &payload));
    }

    #[test]
    fn test_digest_json_and_bincode() {
        let digest = MessageDigest::compute(b"message");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest));
        let restored: MessageDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, restored);

        let encoded = bincode::serialize(&digest).unwrap();
        assert_eq!(encoded.as_slice(), digest.as_slice());
        let decoded: MessageDigest = bincode::deserialize(&encoded).unwrap();
        assert_eq!(digest, decoded);

        assert!(serde_json::from_str::<MessageDigest>("\"00ff\"").is_err());
    }
}
