//! Containers for secret material
//!
//! - Seeds and derived node keys are zeroized on drop
//! - `Debug` output shows `[REDACTED]` instead of secret bytes
//! - None of the containers implement `Clone`

mod material;
mod secret;

pub use material::{DerivationInfo, DerivedKeyMaterial, KEY_MATERIAL_LEN};
pub use secret::{SecretArray, SecretString};
