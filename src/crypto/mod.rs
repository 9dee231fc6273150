/// Modular arithmetic and uniform sampling over `BigUint`.
pub mod field;
/// Zeroize-on-drop storage for key material.
pub mod secret;

pub use field::{mod_pow, random_below};
pub use secret::SecretUint;

use num_bigint::BigUint;

/// Minimal big-endian encoding. Zero encodes as the empty string.
pub(crate) fn minimal_be(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        return Vec::new();
    }
    value.to_bytes_be()
}
