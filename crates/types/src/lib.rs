//! Chain data model for the Filecoin wallet core.
//!
//! This crate provides the structures the signing core consumes and produces:
//! addresses and their textual codec, messages and their digests, signature
//! envelopes and exportable key records.

#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod address;
mod base64_bytes;
pub mod hash;
pub mod key_info;
pub mod message;
pub mod signature;

pub use address::{Address, AddressError, Network, Payload, Protocol};
pub use hash::{MessageDigest, MESSAGE_DIGEST_LEN};
pub use key_info::{KeyInfo, KeyInfoError, KeyType, PRIVATE_KEY_LEN};
pub use message::{Message, MessageError, SignedMessage};
pub use signature::{SigType, Signature, SignatureError};
