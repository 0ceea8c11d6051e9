//! Exportable private key record.
//!
//! Matches the Lotus `KeyInfo` JSON shape:
//!
//! ```json
//! {"Type":"secp256k1","PrivateKey":"<base64>"}
//! ```
//!
//! The transport form used by `lotus wallet export`/`import` is the hex
//! encoding of those JSON bytes. A `KeyInfo` is as sensitive as the key it
//! carries; it is zeroized on drop and its `Debug` output is redacted.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Private key width shared by both supported key types
pub const PRIVATE_KEY_LEN: usize = 32;

/// Key record encoding errors
#[derive(Debug, Error)]
pub enum KeyInfoError {
    /// JSON encoding or decoding failed
    #[error("key info json: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport string is not valid hex
    #[error("key info hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Key type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// secp256k1 scalar
    Secp256k1,
    /// BLS12-381 secret key
    Bls,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Secp256k1 => f.write_str("secp256k1"),
            KeyType::Bls => f.write_str("bls"),
        }
    }
}

/// Tagged private key record
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyInfo {
    #[serde(rename = "Type")]
    #[zeroize(skip)]
    key_type: KeyType,
    #[serde(rename = "PrivateKey", with = "crate::base64_bytes")]
    private_key: Vec<u8>,
}

impl KeyInfo {
    /// Record a fixed-width private key
    pub fn new(key_type: KeyType, private_key: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self {
            key_type,
            private_key: private_key.to_vec(),
        }
    }

    /// Key type tag
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Raw private key bytes
    ///
    /// Width is not checked here; records read from outside may carry any
    /// length and are validated when turned back into a key.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// Serialize to the hex-of-JSON transport form
    pub fn to_hex(&self) -> Result<String, KeyInfoError> {
        let mut json = serde_json::to_vec(self)?;
        let encoded = hex::encode(&json);
        json.zeroize();
        Ok(encoded)
    }

    /// Parse the hex-of-JSON transport form
    pub fn from_hex(encoded: &str) -> Result<Self, KeyInfoError> {
        let mut json = hex::decode(encoded.trim())?;
        let parsed: Result<Self, serde_json::Error> = serde_json::from_slice(&json);
        json.zeroize();
        Ok(parsed?)
    }
}

impl fmt::Debug for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyInfo")
            .field("key_type", &self.key_type)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let info = KeyInfo::new(KeyType::Secp256k1, [0u8; 32]);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["Type"], "secp256k1");
        assert_eq!(
            value["PrivateKey"],
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="
        );
    }

    #[test]
    fn test_hex_transport_roundtrip() {
        let mut key = [0u8; 32];
        key[31] = 1;
        let info = KeyInfo::new(KeyType::Bls, key);

        let encoded = info.to_hex().unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));

        let decoded = KeyInfo::from_hex(&encoded).unwrap();
        assert_eq!(decoded.key_type(), KeyType::Bls);
        assert_eq!(decoded.private_key(), &key);
    }

    #[test]
    fn test_hex_is_json() {
        let info = KeyInfo::new(KeyType::Secp256k1, [0xAB; 32]);
        let json = hex::decode(info.to_hex().unwrap()).unwrap();
        let text = String::from_utf8(json).unwrap();
        assert!(text.starts_with(r#"{"Type":"secp256k1","PrivateKey":""#));
    }

    #[test]
    fn test_bad_transport_rejected() {
        assert!(matches!(
            KeyInfo::from_hex("zz"),
            Err(KeyInfoError::Hex(_))
        ));
        assert!(matches!(
            KeyInfo::from_hex(&hex::encode(b"{\"Type\":\"rsa\"}")),
            Err(KeyInfoError::Json(_))
        ));
    }

    #[test]
    fn test_debug_redacted() {
        let info = KeyInfo::new(KeyType::Secp256k1, [0xAB; 32]);
        let debug = format!("{:?}", info);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("171"));
        assert!(!debug.contains("ab"));
    }
}
