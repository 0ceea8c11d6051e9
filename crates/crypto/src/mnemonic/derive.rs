//! Key derivation from mnemonic phrases
//!
//! Walks the BIP-44 path `m/44'/461'/0'/0/<account>` with BIP-32 and turns
//! the resulting node key into a scheme-specific private key.

use super::error::{MnemonicError, MnemonicResult};
use super::generate::Mnemonic;
use crate::bls::{BlsKeyPair, BlsSecretKey};
use crate::error::CryptoResult;
use crate::keys::{KeyScheme, PrivateKey};
use crate::secp256k1::{Secp256k1KeyPair, Secp256k1SecretKey};
use crate::secure::{DerivationInfo, DerivedKeyMaterial, KEY_MATERIAL_LEN};
use bip32::{ChildNumber, DerivationPath, XPrv};
use filwallet_types::{Address, Network};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use zeroize::Zeroizing;

/// BIP-44 purpose
pub const BIP44_PURPOSE: u32 = 44;

/// Filecoin coin type (SLIP-0044)
pub const FILECOIN_COIN_TYPE: u32 = 461;

/// Derivation path of account 0
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/461'/0'/0/0";

/// Longest accepted BIP-39 passphrase in bytes
pub const MAX_PASSPHRASE_LEN: usize = 256;

/// Configuration for key derivation
///
/// Deserializes from partial documents; missing fields take their defaults
/// (account 0, no passphrase, mainnet). The passphrase is never serialized.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationConfig {
    /// Account index, the last (non-hardened) path component
    pub account: u32,
    /// Optional BIP-39 passphrase
    #[serde(skip_serializing)]
    pub passphrase: Option<String>,
    /// Network used when rendering addresses
    pub network: Network,
}

impl DerivationConfig {
    /// Create a new derivation config for the given account
    pub fn new(account: u32) -> Self {
        Self {
            account,
            ..Self::default()
        }
    }

    /// Set the passphrase
    pub fn with_passphrase(mut self, passphrase: &str) -> Self {
        self.passphrase = Some(passphrase.to_string());
        self
    }

    /// Set the network
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Get the derivation path
    pub fn path(&self) -> String {
        format!(
            "m/{}'/{}'/0'/0/{}",
            BIP44_PURPOSE, FILECOIN_COIN_TYPE, self.account
        )
    }
}

impl std::fmt::Debug for DerivationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivationConfig")
            .field("account", &self.account)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("network", &self.network)
            .finish()
    }
}

/// Derive the private key of one scheme for one account
///
/// Parses the phrase, derives the node for `account` with an empty
/// passphrase and interprets it for `scheme`. Phrase and path failures
/// surface as `CryptoError::Derivation`.
///
/// # Example
///
/// ```rust
/// use filwallet_crypto::{derive, KeyScheme};
/// use filwallet_types::{Address, Network};
///
/// let phrase = "test test test test test test test test test test test junk";
/// let key = derive(phrase, 0, KeyScheme::Secp256k1).unwrap();
/// assert_eq!(
///     key.address(Network::Mainnet).unwrap().to_string(),
///     "f1qid3qslm4jax2jpohkdwomtidgd3x7xa7qvahea"
/// );
/// ```
pub fn derive(phrase: &str, account: u32, scheme: KeyScheme) -> CryptoResult<PrivateKey> {
    let mnemonic = Mnemonic::from_phrase(phrase)?;
    let config = DerivationConfig::new(account);
    let material = derive_key_material(&mnemonic, &config)?;
    debug!(account, path = %material.info().path, %scheme, "derived private key");
    Ok(key_from_material(&material, scheme)?)
}

/// Address of the `scheme` key for `config.account`, rendered for `config.network`
pub fn derive_address(
    mnemonic: &Mnemonic,
    config: &DerivationConfig,
    scheme: KeyScheme,
) -> CryptoResult<Address> {
    let material = derive_key_material(mnemonic, config)?;
    let address = key_from_material(&material, scheme)?.address(config.network)?;
    debug!(account = config.account, network = %config.network, %address, "derived address");
    Ok(address)
}

/// Derive both the secp256k1 and BLS key pairs for one account
pub fn derive_keys(
    mnemonic: &Mnemonic,
    config: &DerivationConfig,
) -> MnemonicResult<(Secp256k1KeyPair, BlsKeyPair)> {
    let material = derive_key_material(mnemonic, config)?;
    let secp = Secp256k1KeyPair::from_secret_key(secp256k1_secret(&material)?);
    let bls = BlsKeyPair::from_secret_key(bls_secret(&material)?);
    Ok((secp, bls))
}

/// Derive a secp256k1 key pair from a mnemonic
pub fn derive_secp256k1_key(
    mnemonic: &Mnemonic,
    config: &DerivationConfig,
) -> MnemonicResult<Secp256k1KeyPair> {
    let material = derive_key_material(mnemonic, config)?;
    Ok(Secp256k1KeyPair::from_secret_key(secp256k1_secret(
        &material,
    )?))
}

/// Derive a BLS key pair from a mnemonic
pub fn derive_bls_key(
    mnemonic: &Mnemonic,
    config: &DerivationConfig,
) -> MnemonicResult<BlsKeyPair> {
    let material = derive_key_material(mnemonic, config)?;
    Ok(BlsKeyPair::from_secret_key(bls_secret(&material)?))
}

/// Walk the account path and return the raw node key
///
/// # Errors
///
/// - `PassphraseTooLong` for passphrases over [`MAX_PASSPHRASE_LEN`] bytes
/// - `InvalidPath` for hardened-range account indices
/// - `DerivationFailed` if BIP-32 rejects the master key or a child
pub fn derive_key_material(
    mnemonic: &Mnemonic,
    config: &DerivationConfig,
) -> MnemonicResult<DerivedKeyMaterial> {
    if let Some(passphrase) = &config.passphrase {
        if passphrase.len() > MAX_PASSPHRASE_LEN {
            return Err(MnemonicError::PassphraseTooLong {
                max: MAX_PASSPHRASE_LEN,
            });
        }
    }
    // Rejected up front so the path string below is always well formed
    ChildNumber::new(config.account, false).map_err(|_| {
        MnemonicError::InvalidPath(format!(
            "account index {} is outside the non-hardened range",
            config.account
        ))
    })?;

    let path = config.path();
    let seed = mnemonic.to_seed(config.passphrase.as_deref());
    let node = derive_path(seed.expose_secret(), &path)?;

    debug!(account = config.account, %path, "derived key material");

    Ok(DerivedKeyMaterial::new(
        *node,
        DerivationInfo {
            account_index: config.account,
            path,
        },
    ))
}

/// Interpret node key material for a scheme
pub fn key_from_material(
    material: &DerivedKeyMaterial,
    scheme: KeyScheme,
) -> MnemonicResult<PrivateKey> {
    match scheme {
        KeyScheme::Secp256k1 => Ok(PrivateKey::Secp256k1(secp256k1_secret(material)?)),
        KeyScheme::Bls => Ok(PrivateKey::Bls(bls_secret(material)?)),
    }
}

fn secp256k1_secret(material: &DerivedKeyMaterial) -> MnemonicResult<Secp256k1SecretKey> {
    Secp256k1SecretKey::from_bytes(material.bytes())
        .map_err(|e| MnemonicError::DerivationFailed(e.to_string()))
}

fn bls_secret(material: &DerivedKeyMaterial) -> MnemonicResult<BlsSecretKey> {
    BlsSecretKey::from_seed(material.bytes())
        .map_err(|e| MnemonicError::DerivationFailed(e.to_string()))
}

/// BIP-32 walk from a 64-byte seed
fn derive_path(seed: &[u8], path: &str) -> MnemonicResult<Zeroizing<[u8; KEY_MATERIAL_LEN]>> {
    let derivation_path = DerivationPath::from_str(path)
        .map_err(|e| MnemonicError::InvalidPath(format!("{}: {}", path, e)))?;

    let mut node = XPrv::new(seed)?;
    for child_number in derivation_path {
        node = node.derive_child(child_number)?;
    }

    Ok(Zeroizing::new(node.private_key().to_bytes().into()))
}
