//! Raw BIP-32 node key with automatic memory zeroing
//!
//! `DerivedKeyMaterial` is the 32-byte private key of the node reached by
//! walking the account path. It is interpreted per scheme: as the secp256k1
//! scalar directly, or as input key material for BLS key generation. It is
//! dropped (and zeroized) at the end of each derivation.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Width of a BIP-32 node private key
pub const KEY_MATERIAL_LEN: usize = 32;

/// Where a piece of key material came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationInfo {
    /// Account index (last path component)
    pub account_index: u32,
    /// Full derivation path, e.g. `m/44'/461'/0'/0/0`
    pub path: String,
}

/// Memory-safe container for a derived node key.
///
/// Intentionally not `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeyMaterial {
    bytes: [u8; KEY_MATERIAL_LEN],
    #[zeroize(skip)]
    info: DerivationInfo,
}

impl DerivedKeyMaterial {
    /// Wrap node key bytes together with their derivation info
    pub fn new(bytes: [u8; KEY_MATERIAL_LEN], info: DerivationInfo) -> Self {
        Self { bytes, info }
    }

    /// The node key bytes
    #[inline]
    pub fn bytes(&self) -> &[u8; KEY_MATERIAL_LEN] {
        &self.bytes
    }

    /// Derivation info
    pub fn info(&self) -> &DerivationInfo {
        &self.info
    }
}

impl std::fmt::Debug for DerivedKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKeyMaterial")
            .field("bytes", &"[REDACTED]")
            .field("info", &self.info)
            .finish()
    }
}
