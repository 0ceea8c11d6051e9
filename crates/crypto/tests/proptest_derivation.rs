//! Property-based tests for phrase parsing, derivation and signing
//!
//! Uses proptest to check key invariants across many random phrases.

use filwallet_crypto::{
    derive, export_key, sign_digest, verify_signature, KeyScheme, Mnemonic, PrivateKey,
};
use filwallet_types::{Address, KeyInfo, Network};
use proptest::prelude::*;
use std::str::FromStr;

fn phrase_from(entropy: [u8; 16]) -> String {
    bip39::Mnemonic::from_entropy(&entropy)
        .expect("16 bytes is valid entropy")
        .to_string()
}

fn scheme() -> impl Strategy<Value = KeyScheme> {
    prop_oneof![Just(KeyScheme::Secp256k1), Just(KeyScheme::Bls)]
}

fn network() -> impl Strategy<Value = Network> {
    prop_oneof![Just(Network::Mainnet), Just(Network::Testnet)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))] // PBKDF2 makes every case slow

    /// Property: phrases built from entropy always parse
    #[test]
    fn prop_entropy_phrase_parses(entropy in any::<[u8; 16]>()) {
        let phrase = phrase_from(entropy);
        let mnemonic = Mnemonic::from_phrase(&phrase).expect("should parse phrase");
        prop_assert_eq!(mnemonic.word_count(), 12);
        prop_assert_eq!(mnemonic.phrase(), phrase.as_str());
    }

    /// Property: derivation is deterministic
    #[test]
    fn prop_derivation_determinism(
        entropy in any::<[u8; 16]>(),
        account in 0u32..1000,
        scheme in scheme(),
    ) {
        let phrase = phrase_from(entropy);
        let a = derive(&phrase, account, scheme).expect("derive 1");
        let b = derive(&phrase, account, scheme).expect("derive 2");
        prop_assert_eq!(a.to_bytes(), b.to_bytes());
    }

    /// Property: different accounts give different keys
    #[test]
    fn prop_different_accounts_different_keys(
        entropy in any::<[u8; 16]>(),
        account1 in 0u32..50,
        account2 in 50u32..100,
        scheme in scheme(),
    ) {
        let phrase = phrase_from(entropy);
        let a = derive(&phrase, account1, scheme).expect("derive 1");
        let b = derive(&phrase, account2, scheme).expect("derive 2");
        prop_assert_ne!(a.to_bytes(), b.to_bytes());
    }

    /// Property: rendered addresses parse back to the same address
    #[test]
    fn prop_address_roundtrip(
        entropy in any::<[u8; 16]>(),
        account in 0u32..1000,
        scheme in scheme(),
        network in network(),
    ) {
        let phrase = phrase_from(entropy);
        let address = derive(&phrase, account, scheme)
            .expect("derive")
            .address(network)
            .expect("address");

        let text = address.to_string();
        prop_assert_eq!(text.chars().next(), Some(network.prefix()));
        let parsed = Address::from_str(&text).expect("parse");
        prop_assert_eq!(parsed.protocol(), scheme.protocol());
        prop_assert_eq!(parsed, address);
    }

    /// Property: exported records always carry 32 key bytes and import back
    #[test]
    fn prop_export_width(entropy in any::<[u8; 16]>(), account in 0u32..1000, scheme in scheme()) {
        let phrase = phrase_from(entropy);
        let key = derive(&phrase, account, scheme).expect("derive");

        let info = KeyInfo::from_hex(&export_key(&key).expect("export")).expect("decode");
        prop_assert_eq!(info.key_type(), scheme.key_type());
        prop_assert_eq!(info.private_key().len(), 32);

        let imported = PrivateKey::try_from(&info).expect("import");
        prop_assert_eq!(imported.public_key(), key.public_key());
    }

    /// Property: signatures verify for the signer and carry its scheme
    #[test]
    fn prop_signature_validity(
        entropy in any::<[u8; 16]>(),
        digest in any::<[u8; 32]>(),
        scheme in scheme(),
    ) {
        let phrase = phrase_from(entropy);
        let key = derive(&phrase, 0, scheme).expect("derive");
        let address = key.address(Network::Mainnet).expect("address");

        let signature = sign_digest(&key, &digest).expect("sign");
        prop_assert_eq!(signature.sig_type(), scheme.sig_type());
        prop_assert!(verify_signature(&address, &digest, &signature).is_ok());
    }
}
