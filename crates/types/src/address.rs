//! Filecoin account addresses.
//!
//! An address is a network tag, a protocol and a protocol-specific payload.
//! The textual form is:
//!
//! ```text
//! <network: f|t> <protocol: 0-3> <payload>
//! ```
//!
//! where the payload of an ID address is the decimal actor id, and the payload
//! of every other protocol is `base32lower_nopad(payload || checksum)` with
//! `checksum = blake2b-32(protocol_byte || payload)`.
//!
//! The protocol is carried as an enum from the moment an address is parsed,
//! so callers pick a signature scheme with a `match` instead of inspecting
//! string prefixes.

use crate::hash::{address_checksum, blake2b_160, CHECKSUM_LEN, PAYLOAD_HASH_LEN};
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Uncompressed secp256k1 public key length (`0x04 || X || Y`)
pub const SECP256K1_PUBLIC_KEY_LEN: usize = 65;

/// Compressed BLS12-381 G1 public key length
pub const BLS_PUBLIC_KEY_LEN: usize = 48;

/// Longest decimal representation of a `u64` actor id
const MAX_ID_DIGITS: usize = 20;

/// Address parsing and construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address string too short to hold network, protocol and payload
    #[error("address too short: {0:?}")]
    TooShort(String),

    /// First character is not a known network prefix
    #[error("unknown network prefix '{0}'")]
    UnknownNetwork(char),

    /// Second character is not a known protocol digit
    #[error("unknown address protocol '{0}'")]
    UnknownProtocol(char),

    /// ID payload is not a valid decimal u64
    #[error("invalid actor id: {0}")]
    InvalidId(String),

    /// Payload is not valid lowercase base32
    #[error("invalid address encoding: {0}")]
    InvalidEncoding(String),

    /// Payload has the wrong length for its protocol
    #[error("invalid {protocol} payload length: expected {expected}, got {actual}")]
    InvalidPayloadLength {
        /// Protocol being decoded
        protocol: Protocol,
        /// Payload length required by the protocol
        expected: usize,
        /// Payload length found
        actual: usize,
    },

    /// Public key cannot be turned into an address
    #[error("invalid {protocol} public key: expected {expected} bytes, got {actual}")]
    InvalidPublicKey {
        /// Protocol the key was meant for
        protocol: Protocol,
        /// Key length required by the protocol
        expected: usize,
        /// Key length supplied
        actual: usize,
    },

    /// Checksum does not match the payload
    #[error("address checksum mismatch")]
    InvalidChecksum,
}

/// Network an address is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet, prefix `f`
    #[default]
    Mainnet,
    /// Any test network, prefix `t`
    Testnet,
}

impl Network {
    /// Leading character of addresses on this network
    pub const fn prefix(self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    fn from_prefix(c: char) -> Result<Self, AddressError> {
        match c {
            'f' => Ok(Network::Mainnet),
            't' => Ok(Network::Testnet),
            other => Err(AddressError::UnknownNetwork(other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Address protocol (the digit after the network prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Protocol {
    /// Actor id assigned by the chain
    Id = 0,
    /// blake2b-160 of an uncompressed secp256k1 public key
    Secp256k1 = 1,
    /// blake2b-160 of actor creation data
    Actor = 2,
    /// Raw BLS12-381 public key
    Bls = 3,
}

impl Protocol {
    /// Protocol byte as used in checksums
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    fn from_digit(c: char) -> Result<Self, AddressError> {
        match c {
            '0' => Ok(Protocol::Id),
            '1' => Ok(Protocol::Secp256k1),
            '2' => Ok(Protocol::Actor),
            '3' => Ok(Protocol::Bls),
            other => Err(AddressError::UnknownProtocol(other)),
        }
    }

    fn payload_len(self) -> usize {
        match self {
            Protocol::Id => 0,
            Protocol::Secp256k1 | Protocol::Actor => PAYLOAD_HASH_LEN,
            Protocol::Bls => BLS_PUBLIC_KEY_LEN,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::Id => "id",
            Protocol::Secp256k1 => "secp256k1",
            Protocol::Actor => "actor",
            Protocol::Bls => "bls",
        };
        f.write_str(name)
    }
}

/// Protocol-specific address payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    /// Actor id
    Id(u64),
    /// blake2b-160 of the public key
    Secp256k1([u8; PAYLOAD_HASH_LEN]),
    /// blake2b-160 of the creation data
    Actor([u8; PAYLOAD_HASH_LEN]),
    /// Compressed G1 public key
    Bls([u8; BLS_PUBLIC_KEY_LEN]),
}

impl Payload {
    /// Protocol of this payload
    pub fn protocol(&self) -> Protocol {
        match self {
            Payload::Id(_) => Protocol::Id,
            Payload::Secp256k1(_) => Protocol::Secp256k1,
            Payload::Actor(_) => Protocol::Actor,
            Payload::Bls(_) => Protocol::Bls,
        }
    }

    fn hashed_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Id(_) => None,
            Payload::Secp256k1(bytes) | Payload::Actor(bytes) => Some(bytes),
            Payload::Bls(bytes) => Some(bytes),
        }
    }
}

/// A Filecoin address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    network: Network,
    payload: Payload,
}

impl Address {
    /// ID address for an actor id
    pub fn new_id(network: Network, id: u64) -> Self {
        Self {
            network,
            payload: Payload::Id(id),
        }
    }

    /// Secp256k1 address from an uncompressed public key (65 bytes, `0x04` prefix)
    pub fn new_secp256k1(network: Network, public_key: &[u8]) -> Result<Self, AddressError> {
        if public_key.len() != SECP256K1_PUBLIC_KEY_LEN || public_key[0] != 0x04 {
            return Err(AddressError::InvalidPublicKey {
                protocol: Protocol::Secp256k1,
                expected: SECP256K1_PUBLIC_KEY_LEN,
                actual: public_key.len(),
            });
        }
        Ok(Self {
            network,
            payload: Payload::Secp256k1(blake2b_160(public_key)),
        })
    }

    /// Actor address from actor creation data
    pub fn new_actor(network: Network, data: &[u8]) -> Self {
        Self {
            network,
            payload: Payload::Actor(blake2b_160(data)),
        }
    }

    /// BLS address from a compressed G1 public key (48 bytes)
    pub fn new_bls(network: Network, public_key: &[u8]) -> Result<Self, AddressError> {
        let key: [u8; BLS_PUBLIC_KEY_LEN] =
            public_key
                .try_into()
                .map_err(|_| AddressError::InvalidPublicKey {
                    protocol: Protocol::Bls,
                    expected: BLS_PUBLIC_KEY_LEN,
                    actual: public_key.len(),
                })?;
        Ok(Self {
            network,
            payload: Payload::Bls(key),
        })
    }

    /// Network this address renders for
    pub fn network(&self) -> Network {
        self.network
    }

    /// Same address on another network
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Address protocol
    pub fn protocol(&self) -> Protocol {
        self.payload.protocol()
    }

    /// Protocol-specific payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Raw payload bytes (empty for ID addresses)
    pub fn payload_bytes(&self) -> &[u8] {
        self.payload.hashed_bytes().unwrap_or(&[])
    }

    /// Checksum over protocol and payload, `None` for ID addresses
    pub fn checksum(&self) -> Option<[u8; CHECKSUM_LEN]> {
        self.payload
            .hashed_bytes()
            .map(|bytes| address_checksum(self.protocol().as_byte(), bytes))
    }

    fn decode_payload(protocol: Protocol, raw: &str) -> Result<Payload, AddressError> {
        if let Protocol::Id = protocol {
            if raw.len() > MAX_ID_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AddressError::InvalidId(raw.to_string()));
            }
            let id = raw
                .parse::<u64>()
                .map_err(|e| AddressError::InvalidId(e.to_string()))?;
            return Ok(Payload::Id(id));
        }

        if raw.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(AddressError::InvalidEncoding(
                "address payload must be lowercase".to_string(),
            ));
        }
        let decoded = BASE32_NOPAD
            .decode(raw.to_ascii_uppercase().as_bytes())
            .map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;

        let expected = protocol.payload_len();
        if decoded.len() != expected + CHECKSUM_LEN {
            return Err(AddressError::InvalidPayloadLength {
                protocol,
                expected,
                actual: decoded.len().saturating_sub(CHECKSUM_LEN),
            });
        }

        let (bytes, checksum) = decoded.split_at(expected);
        if address_checksum(protocol.as_byte(), bytes) != checksum {
            return Err(AddressError::InvalidChecksum);
        }

        let payload = match protocol {
            Protocol::Secp256k1 => Payload::Secp256k1(to_array(protocol, bytes)?),
            Protocol::Actor => Payload::Actor(to_array(protocol, bytes)?),
            Protocol::Bls => Payload::Bls(to_array(protocol, bytes)?),
            Protocol::Id => return Err(AddressError::InvalidId(raw.to_string())),
        };
        Ok(payload)
    }
}

fn to_array<const N: usize>(protocol: Protocol, bytes: &[u8]) -> Result<[u8; N], AddressError> {
    bytes
        .try_into()
        .map_err(|_| AddressError::InvalidPayloadLength {
            protocol,
            expected: N,
            actual: bytes.len(),
        })
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let protocol = self.protocol();
        write!(f, "{}{}", self.network.prefix(), protocol.as_byte())?;
        match &self.payload {
            Payload::Id(id) => write!(f, "{}", id),
            other => {
                let bytes = other.hashed_bytes().unwrap_or(&[]);
                let mut buf = Vec::with_capacity(bytes.len() + CHECKSUM_LEN);
                buf.extend_from_slice(bytes);
                buf.extend_from_slice(&address_checksum(protocol.as_byte(), bytes));
                f.write_str(&BASE32_NOPAD.encode(&buf).to_ascii_lowercase())
            }
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(network), Some(protocol)) = (chars.next(), chars.next()) else {
            return Err(AddressError::TooShort(s.to_string()));
        };
        let raw = chars.as_str();
        if raw.is_empty() {
            return Err(AddressError::TooShort(s.to_string()));
        }

        let network = Network::from_prefix(network)?;
        let protocol = Protocol::from_digit(protocol)?;
        let payload = Self::decode_payload(protocol, raw)?;

        Ok(Self { network, payload })
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}
