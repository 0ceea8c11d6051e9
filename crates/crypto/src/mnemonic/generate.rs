//! Seed phrase parsing
//!
//! Implements BIP-39 phrase validation and seed stretching.

use super::error::MnemonicResult;
use crate::secure::{SecretArray, SecretString};
use bip39::Mnemonic as Bip39Mnemonic;
use secrecy::ExposeSecret;
use zeroize::ZeroizeOnDrop;

/// BIP-39 mnemonic phrase wrapper
///
/// The phrase is stored as a `SecretString` so it cannot end up in logs, and
/// both the phrase and every seed produced from it are zeroized on drop.
///
/// # Example
///
/// ```rust
/// use filwallet_crypto::mnemonic::Mnemonic;
///
/// let phrase = "test test test test test test test test test test test junk";
/// let mnemonic = Mnemonic::from_phrase(phrase).unwrap();
/// assert_eq!(mnemonic.word_count(), 12);
/// ```
#[derive(ZeroizeOnDrop)]
pub struct Mnemonic {
    #[zeroize(skip)] // bip39::Mnemonic doesn't impl Zeroize
    inner: Bip39Mnemonic,
    phrase: SecretString,
}

impl Mnemonic {
    /// Parse and validate a phrase
    ///
    /// Surrounding whitespace is trimmed and words are lowercased before the
    /// word list and checksum are checked.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidPhrase` if:
    /// - The phrase contains words outside the English word list
    /// - The word count is invalid (not 12, 15, 18, 21, or 24)
    /// - The checksum is invalid
    pub fn from_phrase(phrase: &str) -> MnemonicResult<Self> {
        let normalized = normalize(phrase);
        let mnemonic = Bip39Mnemonic::parse_normalized(&normalized)?;

        Ok(Self {
            phrase: normalized.into(),
            inner: mnemonic,
        })
    }

    /// Get the normalized phrase
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    /// Get the number of words in the mnemonic
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Stretch the phrase into the 64-byte BIP-39 seed
    ///
    /// PBKDF2-HMAC-SHA512 with the phrase as password and
    /// `"mnemonic" || passphrase` as salt. No passphrase means the empty one.
    pub fn to_seed(&self, passphrase: Option<&str>) -> SecretArray<64> {
        SecretArray::new(self.inner.to_seed(passphrase.unwrap_or("")))
    }

    /// Check that a phrase is a valid BIP-39 mnemonic
    pub fn validate(phrase: &str) -> MnemonicResult<()> {
        Bip39Mnemonic::parse_normalized(&normalize(phrase))?;
        Ok(())
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
