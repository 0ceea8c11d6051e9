//! Chain signature envelope.
//!
//! A signature is tagged with the algorithm that produced it. The tag is the
//! only thing the chain uses to pick a verifier, so it must always match the
//! algorithm actually used.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Recoverable secp256k1 signature length (`r || s || v`)
pub const SECP256K1_SIGNATURE_LEN: usize = 65;

/// BLS12-381 G2 signature length
pub const BLS_SIGNATURE_LEN: usize = 96;

/// Signature envelope errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Unknown signature type tag
    #[error("unknown signature type {0}")]
    UnknownType(u8),

    /// Signature bytes do not match the fixed width of their type
    #[error("invalid {sig_type} signature length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Declared signature type
        sig_type: SigType,
        /// Width required by the type
        expected: usize,
        /// Width found
        actual: usize,
    },
}

/// Signature algorithm tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SigType {
    /// ECDSA over secp256k1
    Secp256k1 = 1,
    /// BLS12-381, signatures in G2
    Bls = 2,
}

impl SigType {
    /// Fixed signature width for this type
    pub const fn signature_len(self) -> usize {
        match self {
            SigType::Secp256k1 => SECP256K1_SIGNATURE_LEN,
            SigType::Bls => BLS_SIGNATURE_LEN,
        }
    }
}

impl TryFrom<u8> for SigType {
    type Error = SignatureError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SigType::Secp256k1),
            2 => Ok(SigType::Bls),
            other => Err(SignatureError::UnknownType(other)),
        }
    }
}

impl From<SigType> for u8 {
    fn from(sig_type: SigType) -> Self {
        sig_type as u8
    }
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigType::Secp256k1 => f.write_str("secp256k1"),
            SigType::Bls => f.write_str("bls"),
        }
    }
}

/// Tagged signature bytes
///
/// Deserialization goes through [`Signature::from_parts`], so a decoded
/// signature always has the width its tag requires.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSignature")]
pub struct Signature {
    #[serde(rename = "Type")]
    sig_type: SigType,
    #[serde(rename = "Data", with = "crate::base64_bytes")]
    data: Vec<u8>,
}

impl Signature {
    /// Secp256k1 recoverable signature
    pub fn new_secp256k1(bytes: [u8; SECP256K1_SIGNATURE_LEN]) -> Self {
        Self {
            sig_type: SigType::Secp256k1,
            data: bytes.to_vec(),
        }
    }

    /// BLS signature
    pub fn new_bls(bytes: [u8; BLS_SIGNATURE_LEN]) -> Self {
        Self {
            sig_type: SigType::Bls,
            data: bytes.to_vec(),
        }
    }

    /// Build from a tag and raw bytes, checking the width
    pub fn from_parts(sig_type: SigType, data: Vec<u8>) -> Result<Self, SignatureError> {
        if data.len() != sig_type.signature_len() {
            return Err(SignatureError::InvalidLength {
                sig_type,
                expected: sig_type.signature_len(),
                actual: data.len(),
            });
        }
        Ok(Self { sig_type, data })
    }

    /// Algorithm tag
    pub fn sig_type(&self) -> SigType {
        self.sig_type
    }

    /// Raw signature bytes
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Wire form of [`Signature`] before the width check
#[derive(Deserialize)]
struct UncheckedSignature {
    #[serde(rename = "Type")]
    sig_type: SigType,
    #[serde(rename = "Data", with = "crate::base64_bytes")]
    data: Vec<u8>,
}

impl TryFrom<UncheckedSignature> for Signature {
    type Error = SignatureError;

    fn try_from(raw: UncheckedSignature) -> Result<Self, Self::Error> {
        Signature::from_parts(raw.sig_type, raw.data)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.data[..self.data.len().min(8)];
        write!(f, "Signature({}, {})", self.sig_type, hex::encode(head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_constructors() {
        let secp = Signature::new_secp256k1([1u8; 65]);
        assert_eq!(secp.sig_type(), SigType::Secp256k1);
        assert_eq!(secp.bytes().len(), 65);

        let bls = Signature::new_bls([2u8; 96]);
        assert_eq!(bls.sig_type(), SigType::Bls);
        assert_eq!(bls.bytes().len(), 96);
    }

    #[test]
    fn test_from_parts_checks_width() {
        assert!(Signature::from_parts(SigType::Bls, vec![0u8; 96]).is_ok());
        assert_eq!(
            Signature::from_parts(SigType::Secp256k1, vec![0u8; 64]),
            Err(SignatureError::InvalidLength {
                sig_type: SigType::Secp256k1,
                expected: 65,
                actual: 64,
            })
        );
    }

    #[test]
    fn test_lotus_json_shape() {
        let sig = Signature::new_bls([0u8; 96]);
        let value = serde_json::to_value(&sig).unwrap();
        assert_eq!(value["Type"], 2);
        assert!(value["Data"].is_string());

        let restored: Signature = serde_json::from_value(value).unwrap();
        assert_eq!(restored, sig);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"Type":9,"Data":""}"#;
        assert!(serde_json::from_str::<Signature>(json).is_err());
    }

    #[test]
    fn test_wrong_width_rejected_on_decode() {
        for json in [
            r#"{"Type":1,"Data":""}"#,
            r#"{"Type":2,"Data":""}"#,
            r#"{"Type":2,"Data":"AAAA"}"#,
        ] {
            assert!(serde_json::from_str::<Signature>(json).is_err(), "{json}");
        }

        // A valid secp256k1 payload under the BLS tag
        let mut value = serde_json::to_value(Signature::new_secp256k1([3u8; 65])).unwrap();
        value["Type"] = 2.into();
        assert!(serde_json::from_value::<Signature>(value).is_err());

        let mut encoded = bincode::serialize(&Signature::new_bls([4u8; 96])).unwrap();
        encoded[0] = 1;
        assert!(bincode::deserialize::<Signature>(&encoded).is_err());
    }

    #[test]
    fn test_bincode_roundtrip() {
        let sig = Signature::new_secp256k1([7u8; 65]);
        let encoded = bincode::serialize(&sig).unwrap();
        let decoded: Signature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, sig);
    }
}
