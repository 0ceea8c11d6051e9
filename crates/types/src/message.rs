//! Unsigned and signed chain messages.
//!
//! The signing digest of a message is a [`MessageDigest`]: blake2b-256 over the
//! bincode encoding of the message. Parameter encoding for actor methods is
//! done by the caller; `params` is carried as opaque bytes.

use crate::address::Address;
use crate::hash::MessageDigest;
use crate::signature::{SigType, Signature};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message encoding errors
#[derive(Debug, Error)]
pub enum MessageError {
    /// Binary encoding failed
    #[error("message encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// An unsigned message (token transfer or actor method call)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    /// Message format version
    pub version: u64,
    /// Recipient
    pub to: Address,
    /// Sender; its protocol selects the signature scheme
    pub from: Address,
    /// Sender nonce
    pub nonce: u64,
    /// Transferred value in attoFIL
    pub value: u128,
    /// Gas limit
    pub gas_limit: i64,
    /// Maximum price per gas unit in attoFIL
    pub gas_fee_cap: u128,
    /// Miner tip per gas unit in attoFIL
    pub gas_premium: u128,
    /// Actor method number (0 = plain send)
    pub method: u64,
    /// Encoded method parameters
    pub params: Vec<u8>,
}

impl Message {
    /// Plain value transfer with zeroed gas fields
    pub fn transfer(from: Address, to: Address, nonce: u64, value: u128) -> Self {
        Self {
            version: 0,
            to,
            from,
            nonce,
            value,
            gas_limit: 0,
            gas_fee_cap: 0,
            gas_premium: 0,
            method: 0,
            params: Vec::new(),
        }
    }

    /// Canonical byte encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>, MessageError> {
        Ok(bincode::serialize(self)?)
    }

    /// The digest that gets signed
    pub fn digest(&self) -> Result<MessageDigest, MessageError> {
        Ok(MessageDigest::compute(&self.to_bytes()?))
    }
}

/// A message together with the sender's signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignedMessage {
    /// The signed message
    pub message: Message,
    /// Signature over `message.digest()`
    pub signature: Signature,
}

impl SignedMessage {
    /// Attach a signature to a message
    pub fn new(message: Message, signature: Signature) -> Self {
        Self { message, signature }
    }

    /// Digest identifying the signed message
    ///
    /// BLS-signed messages are identified by the unsigned message digest,
    /// since their signatures are aggregated into the block. Secp256k1-signed
    /// messages are identified by the digest of the whole envelope.
    pub fn digest(&self) -> Result<MessageDigest, MessageError> {
        match self.signature.sig_type() {
            SigType::Bls => self.message.digest(),
            SigType::Secp256k1 => Ok(MessageDigest::compute(&bincode::serialize(self)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Network;

    fn sample_message() -> Message {
        Message::transfer(
            Address::new_id(Network::Mainnet, 1001),
            Address::new_id(Network::Mainnet, 1002),
            7,
            1_000_000_000_000_000_000,
        )
    }

    #[test]
    fn test_digest_deterministic() {
        let msg = sample_message();
        assert_eq!(msg.digest().unwrap(), msg.digest().unwrap());
    }

    #[test]
    fn test_digest_changes_with_fields() {
        let msg = sample_message();
        let mut bumped = msg.clone();
        bumped.nonce += 1;
        assert_ne!(msg.digest().unwrap(), bumped.digest().unwrap());
    }

    #[test]
    fn test_signed_digest_by_signature_type() {
        let msg = sample_message();

        let bls = SignedMessage::new(msg.clone(), Signature::new_bls([1u8; 96]));
        assert_eq!(bls.digest().unwrap(), msg.digest().unwrap());

        let secp = SignedMessage::new(msg.clone(), Signature::new_secp256k1([1u8; 65]));
        assert_ne!(secp.digest().unwrap(), msg.digest().unwrap());
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample_message()).unwrap();
        assert_eq!(value["From"], "f01001");
        assert_eq!(value["To"], "f01002");
        assert_eq!(value["Nonce"], 7);
        assert!(value.get("GasFeeCap").is_some());
    }
}
