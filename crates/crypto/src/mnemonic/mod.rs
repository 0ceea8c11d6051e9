//! Mnemonic-based key derivation for Filecoin accounts
//!
//! Implements BIP-39 phrase parsing and BIP-32 hierarchical deterministic
//! derivation along the Filecoin BIP-44 path.
//!
//! # Derivation Path
//!
//! ```text
//! m / 44' / 461' / 0' / 0 / account
//! ```
//!
//! Where:
//! - `44'` = BIP-44 purpose
//! - `461'` = Filecoin coin type (SLIP-0044)
//! - `account` = account index (0, 1, 2, ...), non-hardened
//!
//! The 32-byte node key at the end of the path is used directly as the
//! secp256k1 scalar, or as the ChaCha20 seed for BLS key generation.
//!
//! # Example
//!
//! ```rust
//! use filwallet_crypto::mnemonic::{derive_keys, DerivationConfig, Mnemonic};
//! use filwallet_types::Network;
//!
//! let mnemonic = Mnemonic::from_phrase(
//!     "test test test test test test test test test test test junk",
//! ).unwrap();
//!
//! let (secp, bls) = derive_keys(&mnemonic, &DerivationConfig::new(0)).unwrap();
//! println!("{}", secp.public_key.address(Network::Mainnet).unwrap());
//! println!("{}", bls.public_key.address(Network::Mainnet).unwrap());
//! ```

mod derive;
mod error;
mod generate;

pub use derive::{
    derive, derive_address, derive_bls_key, derive_key_material, derive_keys, derive_secp256k1_key,
    key_from_material, DerivationConfig, BIP44_PURPOSE, DEFAULT_DERIVATION_PATH,
    FILECOIN_COIN_TYPE, MAX_PASSPHRASE_LEN,
};
pub use error::{MnemonicError, MnemonicResult};
pub use generate::Mnemonic;
