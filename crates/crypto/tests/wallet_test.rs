//! End-to-end tests for the phrase-in, result-out wallet operations

use filwallet_crypto::wallet::{
    derive_bls_address, derive_secp256k1_address, export_bls_key, export_secp256k1_key,
    sign_message, verify_password,
};
use filwallet_crypto::{
    derive, export_key, sign_digest_with_key_bytes, verify_signed_message, CryptoError,
    KeyScheme, PrivateKey,
};
use filwallet_types::{Address, KeyInfo, KeyType, Message, Network, Protocol, SigType};
use std::collections::HashSet;
use std::str::FromStr;

// Well-known development phrase (DO NOT USE IN PRODUCTION)
const PHRASE: &str = "test test test test test test test test test test test junk";

#[test]
fn golden_secp256k1_address_is_stable() {
    for _ in 0..10 {
        let address = derive_secp256k1_address(PHRASE, 0, Network::Mainnet).unwrap();
        assert_eq!(
            address.to_string(),
            "f1qid3qslm4jax2jpohkdwomtidgd3x7xa7qvahea"
        );
    }
}

#[test]
fn golden_secp256k1_export() {
    let info = KeyInfo::from_hex(&export_secp256k1_key(PHRASE, 1).unwrap()).unwrap();
    assert_eq!(info.key_type(), KeyType::Secp256k1);
    assert_eq!(
        hex::encode(info.private_key()),
        "782dff1f568c29c4ac83af11c7c1d886bd1a3780f3bce8037d9a180321f1fd4e"
    );

    let key = PrivateKey::try_from(&info).unwrap();
    assert_eq!(
        key.address(Network::Mainnet).unwrap().to_string(),
        "f14zh7ha4hrtjida77isj2oskt73ykwbrmppo7tny"
    );
}

#[test]
fn golden_bls_export() {
    let info = KeyInfo::from_hex(&export_bls_key(PHRASE, 0).unwrap()).unwrap();
    assert_eq!(info.key_type(), KeyType::Bls);
    assert_eq!(
        hex::encode(info.private_key()),
        "69fa653f188962aa2cda8d92b742569deb66fb7a80331bb15fb3fe4b3cc7df3e"
    );

    let key = PrivateKey::try_from(&info).unwrap();
    assert_eq!(
        key.address(Network::Mainnet).unwrap(),
        derive_bls_address(PHRASE, 0, Network::Mainnet).unwrap()
    );
}

#[test]
fn hundred_accounts_are_unique() {
    let mut secp = HashSet::new();
    let mut bls = HashSet::new();
    for account in 0..100 {
        assert!(secp.insert(
            derive_secp256k1_address(PHRASE, account, Network::Mainnet)
                .unwrap()
                .to_string()
        ));
        assert!(bls.insert(
            derive_bls_address(PHRASE, account, Network::Mainnet)
                .unwrap()
                .to_string()
        ));
    }
    assert_eq!(secp.len(), 100);
    assert_eq!(bls.len(), 100);
}

#[test]
fn schemes_are_separated() {
    let secp = derive_secp256k1_address(PHRASE, 0, Network::Mainnet).unwrap();
    let bls = derive_bls_address(PHRASE, 0, Network::Mainnet).unwrap();

    assert_eq!(secp.protocol(), Protocol::Secp256k1);
    assert_eq!(bls.protocol(), Protocol::Bls);
    assert_ne!(secp.payload_bytes(), bls.payload_bytes());

    let secp_key = KeyInfo::from_hex(&export_secp256k1_key(PHRASE, 0).unwrap()).unwrap();
    let bls_key = KeyInfo::from_hex(&export_bls_key(PHRASE, 0).unwrap()).unwrap();
    assert_ne!(secp_key.private_key(), bls_key.private_key());
}

#[test]
fn addresses_round_trip() {
    for network in [Network::Mainnet, Network::Testnet] {
        for address in [
            derive_secp256k1_address(PHRASE, 5, network).unwrap(),
            derive_bls_address(PHRASE, 5, network).unwrap(),
        ] {
            let parsed = Address::from_str(&address.to_string()).unwrap();
            assert_eq!(parsed, address);
            assert_eq!(parsed.network(), network);
        }
    }
}

#[test]
fn export_keeps_leading_zero_bytes() {
    let mut scalar = [0u8; 32];
    scalar[31] = 1;
    let key = PrivateKey::from_bytes(KeyType::Secp256k1, &scalar).unwrap();

    let info = KeyInfo::from_hex(&export_key(&key).unwrap()).unwrap();
    assert_eq!(info.private_key(), &scalar);
}

#[test]
fn export_width_is_fixed() {
    for account in 0..20 {
        for exported in [
            export_secp256k1_key(PHRASE, account).unwrap(),
            export_bls_key(PHRASE, account).unwrap(),
        ] {
            let info = KeyInfo::from_hex(&exported).unwrap();
            assert_eq!(info.private_key().len(), 32);
        }
    }
}

#[test]
fn message_scheme_follows_sender() {
    let to = Address::new_id(Network::Mainnet, 99);

    let from = derive_secp256k1_address(PHRASE, 0, Network::Mainnet).unwrap();
    let signed = sign_message(Message::transfer(from, to, 0, 1), PHRASE, 0).unwrap();
    assert_eq!(signed.signature.sig_type(), SigType::Secp256k1);
    assert!(verify_signed_message(&signed).is_ok());

    let from = derive_bls_address(PHRASE, 0, Network::Testnet).unwrap();
    let signed = sign_message(Message::transfer(from, to, 0, 1), PHRASE, 0).unwrap();
    assert_eq!(signed.signature.sig_type(), SigType::Bls);
    assert!(verify_signed_message(&signed).is_ok());
}

#[test]
fn wrong_account_refuses_to_sign() {
    let to = Address::new_id(Network::Mainnet, 99);
    for from in [
        derive_secp256k1_address(PHRASE, 0, Network::Mainnet).unwrap(),
        derive_bls_address(PHRASE, 0, Network::Testnet).unwrap(),
    ] {
        let err = sign_message(Message::transfer(from, to, 0, 1), PHRASE, 1).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::SenderMismatch { sender, .. } if sender == from
        ));
    }
}

#[test]
fn invalid_bls_key_length_rejected() {
    let key = derive(PHRASE, 0, KeyScheme::Bls).unwrap().to_bytes();
    let err = sign_digest_with_key_bytes(KeyType::Bls, &key[..31], &[0u8; 32]).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 31
        }
    ));
}

#[test]
fn password_check() {
    assert!(verify_password(PHRASE, 0));
    assert!(!verify_password("test test test test test test test test test test test test", 0));
    assert!(!verify_password("", 0));
}

#[test]
fn signing_is_deterministic() {
    let from = derive_secp256k1_address(PHRASE, 0, Network::Mainnet).unwrap();
    let message = Message::transfer(from, Address::new_id(Network::Mainnet, 7), 3, 42);
    let a = sign_message(message.clone(), PHRASE, 0).unwrap();
    let b = sign_message(message, PHRASE, 0).unwrap();
    assert_eq!(a.signature, b.signature);
}
