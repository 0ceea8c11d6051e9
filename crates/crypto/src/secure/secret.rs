//! Secret wrappers around the `secrecy` and `zeroize` crates

use zeroize::Zeroize;

/// A secret string that is zeroized on drop.
///
/// Holds seed phrases; the inner value is reached only through
/// `secrecy::ExposeSecret`.
pub type SecretString = secrecy::SecretString;

/// A fixed-size secret byte array, zeroized on drop.
///
/// Used for the 64-byte BIP-39 seed while the derivation path is walked.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Wrap secret bytes
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Expose the secret bytes. The reference should not outlive the call site.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string() {
        let secret: SecretString = "test test junk".to_string().into();
        let exposed: &str = secret.expose_secret();
        assert_eq!(exposed, "test test junk");
    }

    #[test]
    fn test_secret_array() {
        let seed = [0x42u8; 64];
        let secret = SecretArray::new(seed);
        assert_eq!(secret.expose_secret(), &seed);
    }

    #[test]
    fn test_secret_array_zeroize() {
        let mut secret = SecretArray::new([0x42u8; 64]);
        secret.zeroize();
        assert_eq!(secret.expose_secret(), &[0u8; 64]);
    }

    #[test]
    fn test_secret_array_debug() {
        let secret = SecretArray::new([0xABu8; 32]);
        let debug = format!("{:?}", secret);

        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("171")); // 0xAB = 171
    }
}
