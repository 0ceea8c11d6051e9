//! Digest and message signing, and signature verification
//!
//! Messages are signed over their digest. The signing scheme is chosen from the
//! sender address protocol: `f3`/`t3` senders sign with BLS, all others with
//! secp256k1. Signatures are tagged with the scheme that produced them.

use crate::bls::{BlsPublicKey, BlsSignature, BLS_PUBLIC_KEY_LEN};
use crate::error::{CryptoError, CryptoResult};
use crate::keys::{KeyScheme, PrivateKey};
use crate::mnemonic::derive;
use crate::secp256k1::Secp256k1Signature;
use filwallet_types::{Address, KeyType, Message, Protocol, SigType, Signature, SignedMessage};
use tracing::debug;

/// Sign a digest with a private key
pub fn sign_digest(private_key: &PrivateKey, digest: &[u8]) -> CryptoResult<Signature> {
    debug!(
        scheme = %private_key.scheme(),
        digest_len = digest.len(),
        "signing digest"
    );
    private_key.sign(digest)
}

/// Sign a digest with raw key record bytes
///
/// # Errors
///
/// `InvalidKeyLength` when `key_bytes` is not 32 bytes; no signature is
/// produced in that case.
pub fn sign_digest_with_key_bytes(
    key_type: KeyType,
    key_bytes: &[u8],
    digest: &[u8],
) -> CryptoResult<Signature> {
    let private_key = PrivateKey::from_bytes(key_type, key_bytes)?;
    sign_digest(&private_key, digest)
}

/// Sign a message with the key derived for `account`
///
/// The scheme follows `message.from`; the digest is `message.digest()`.
///
/// # Errors
///
/// `SenderMismatch` when `message.from` is a secp256k1 or BLS address that
/// the derived key does not own. Nothing is signed in that case.
pub fn sign_message(message: Message, phrase: &str, account: u32) -> CryptoResult<SignedMessage> {
    let scheme = KeyScheme::for_protocol(message.from.protocol());
    let digest = message.digest()?;
    debug!(from = %message.from, %scheme, %digest, "signing message");

    let private_key = derive(phrase, account, scheme)?;
    if matches!(message.from.protocol(), Protocol::Secp256k1 | Protocol::Bls) {
        let derived = private_key.address(message.from.network())?;
        if derived != message.from {
            return Err(CryptoError::SenderMismatch {
                sender: message.from,
                derived,
            });
        }
    }

    let signature = sign_digest(&private_key, digest.as_slice())?;
    Ok(SignedMessage::new(message, signature))
}

/// Check that `signature` over `digest` was produced by the owner of `address`
///
/// secp256k1: the signer key is recovered and its address compared.
/// BLS: the signature is verified against the key carried in the address.
/// ID and actor addresses carry no key and never verify.
pub fn verify_signature(address: &Address, digest: &[u8], signature: &Signature) -> CryptoResult<()> {
    match (signature.sig_type(), address.protocol()) {
        (SigType::Secp256k1, Protocol::Secp256k1) => {
            let sig = Secp256k1Signature::from_bytes(signature.bytes())?;
            let recovered = sig.recover(digest)?.address(address.network())?;
            if recovered == *address {
                Ok(())
            } else {
                Err(CryptoError::VerificationFailed)
            }
        }
        (SigType::Bls, Protocol::Bls) => {
            let key_bytes: [u8; BLS_PUBLIC_KEY_LEN] = address
                .payload_bytes()
                .try_into()
                .map_err(|_| CryptoError::InvalidPublicKey)?;
            let public_key = BlsPublicKey::from_bytes(&key_bytes)?;
            let sig = BlsSignature::from_bytes(signature.bytes())?;
            if public_key.verify(digest, &sig) {
                Ok(())
            } else {
                Err(CryptoError::VerificationFailed)
            }
        }
        _ => Err(CryptoError::VerificationFailed),
    }
}

/// Verify a signed message against its sender
pub fn verify_signed_message(signed: &SignedMessage) -> CryptoResult<()> {
    let digest = signed.message.digest()?;
    verify_signature(&signed.message.from, digest.as_slice(), &signed.signature)
}
