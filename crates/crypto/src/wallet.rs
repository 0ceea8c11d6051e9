//! Phrase-in, result-out wallet operations
//!
//! Each call takes the seed phrase and an account index, derives what it
//! needs and drops the key material before returning. Nothing is cached.

use crate::error::CryptoResult;
use crate::keys::KeyScheme;
use crate::mnemonic::{derive, derive_address, derive_key_material, DerivationConfig, Mnemonic};
use crate::signer;
use filwallet_types::{Address, Message, Network, SignedMessage};
use tracing::warn;

/// `f1`/`t1` address of an account
pub fn derive_secp256k1_address(phrase: &str, account: u32, network: Network) -> CryptoResult<Address> {
    account_address(phrase, account, network, KeyScheme::Secp256k1)
}

/// `f3`/`t3` address of an account
pub fn derive_bls_address(phrase: &str, account: u32, network: Network) -> CryptoResult<Address> {
    account_address(phrase, account, network, KeyScheme::Bls)
}

fn account_address(
    phrase: &str,
    account: u32,
    network: Network,
    scheme: KeyScheme,
) -> CryptoResult<Address> {
    let mnemonic = Mnemonic::from_phrase(phrase)?;
    let config = DerivationConfig::new(account).with_network(network);
    derive_address(&mnemonic, &config, scheme)
}

/// Export an account's secp256k1 key as a hex key record
pub fn export_secp256k1_key(phrase: &str, account: u32) -> CryptoResult<String> {
    derive(phrase, account, KeyScheme::Secp256k1)?.export_hex()
}

/// Export an account's BLS key as a hex key record
pub fn export_bls_key(phrase: &str, account: u32) -> CryptoResult<String> {
    derive(phrase, account, KeyScheme::Bls)?.export_hex()
}

/// Whether the phrase derives a key for `account`
pub fn verify_password(phrase: &str, account: u32) -> bool {
    let result = Mnemonic::from_phrase(phrase)
        .and_then(|mnemonic| derive_key_material(&mnemonic, &DerivationConfig::new(account)));
    match result {
        Ok(_) => true,
        Err(err) => {
            warn!(account, error = %err, "seed phrase rejected");
            false
        }
    }
}

/// Sign a message as the account the sender address belongs to
pub fn sign_message(message: Message, phrase: &str, account: u32) -> CryptoResult<SignedMessage> {
    signer::sign_message(message, phrase, account)
}
