use std::fmt;

use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Unsigned integer held as big-endian bytes that are wiped on drop.
///
/// `BigUint` frees its limbs without overwriting them, so key material is
/// parked here between operations and only rebuilt into a `BigUint` for the
/// duration of an exponentiation.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretUint(Vec<u8>);

impl SecretUint {
    /// Minimal big-endian bytes; zero is the empty slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Rebuilds the integer value.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<&BigUint> for SecretUint {
    fn from(value: &BigUint) -> Self {
        Self(super::minimal_be(value))
    }
}

impl From<BigUint> for SecretUint {
    fn from(value: BigUint) -> Self {
        Self::from(&value)
    }
}

impl ConstantTimeEq for SecretUint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl fmt::Debug for SecretUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretUint(..)")
    }
}
