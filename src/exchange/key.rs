use std::fmt;

use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::wire::{to_fixed_be, to_minimal_be};
use super::DhGroup;
use crate::crypto::SecretUint;
use crate::{Error, Result};

/// A Diffie-Hellman key.
///
/// Either a full key pair (private exponent `x` and public value `g^x mod p`)
/// produced by [`DhGroup::generate_private_key`], or a public-only key such as
/// a value received from a peer or a shared secret returned by
/// [`DhGroup::compute_key`].
///
/// Both integers are wiped when the key is dropped, equality is constant time
/// over them, and the `Debug` output shows neither.
#[derive(Clone, Default)]
pub struct DhKey {
    x: Option<SecretUint>,
    y: Option<SecretUint>,
    group: Option<DhGroup>,
}

impl DhKey {
    pub(crate) fn from_parts(
        x: Option<BigUint>,
        y: Option<BigUint>,
        group: Option<DhGroup>,
    ) -> Self {
        Self {
            x: x.map(SecretUint::from),
            y: y.map(SecretUint::from),
            group,
        }
    }

    /// Parses a peer's public value as an unsigned big-endian integer.
    ///
    /// Never fails: every byte string (the empty one included) is some integer.
    /// No range check happens here because the group is not known yet;
    /// [`DhGroup::compute_key`] validates the value.
    pub fn from_public_bytes(bytes: &[u8]) -> Self {
        Self::from_parts(None, Some(BigUint::from_bytes_be(bytes)), None)
    }

    /// Returns this key bound to `group`, so that it serializes at the group's
    /// fixed width.
    ///
    /// # Errors
    /// [`Error::PublicKeyOutOfRange`] if the public value is not below the
    /// group's prime and so has no fixed-width encoding in it.
    pub fn with_group(mut self, group: DhGroup) -> Result<Self> {
        if let Some(y) = &self.y {
            if &y.to_biguint() >= group.modulus() {
                return Err(Error::PublicKeyOutOfRange);
            }
        }
        self.group = Some(group);
        Ok(self)
    }

    /// Whether the key carries a private exponent.
    pub fn is_private_key(&self) -> bool {
        self.x.is_some()
    }

    /// A copy of the public value, if set.
    pub fn public_value(&self) -> Option<BigUint> {
        self.y.as_ref().map(SecretUint::to_biguint)
    }

    /// A copy of the private exponent, if this is a full key pair.
    pub fn private_exponent(&self) -> Option<BigUint> {
        self.x.as_ref().map(SecretUint::to_biguint)
    }

    /// The group this key was derived in, if known.
    pub fn group(&self) -> Option<&DhGroup> {
        self.group.as_ref()
    }

    /// Serializes the public value for the wire.
    ///
    /// With a group attached the output is always `ceil(bits(p) / 8)` bytes,
    /// left-padded with zeros; keys only carry a group when their public value
    /// is below its prime. Without a group it is the minimal big-endian
    /// encoding. An unset public value yields an empty vector.
    pub fn marshal_public(&self) -> Vec<u8> {
        let Some(y) = &self.y else {
            return Vec::new();
        };

        match &self.group {
            Some(group) => to_fixed_be(&y.to_biguint(), group.public_len()),
            None => to_minimal_be(&y.to_biguint()),
        }
    }

    /// Decimal form of the public value, for display only.
    pub fn marshal_public_string(&self) -> String {
        self.public_value()
            .map(|y| y.to_str_radix(10))
            .unwrap_or_default()
    }
}

fn ct_eq_opt(a: &Option<SecretUint>, b: &Option<SecretUint>) -> Choice {
    match (a, b) {
        (Some(a), Some(b)) => a.ct_eq(b),
        (None, None) => Choice::from(1),
        _ => Choice::from(0),
    }
}

impl ConstantTimeEq for DhKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_opt(&self.x, &other.x) & ct_eq_opt(&self.y, &other.y)
    }
}

impl PartialEq for DhKey {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other)) && self.group == other.group
    }
}

impl Eq for DhKey {}

impl Zeroize for DhKey {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

// both integers are `SecretUint`, which wipes itself on drop
impl ZeroizeOnDrop for DhKey {}

impl fmt::Debug for DhKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhKey")
            .field("private", &self.x.as_ref().map(|_| "<redacted>"))
            .field("public_bits", &self.public_value().map(|y| y.bits()))
            .field("group", &self.group)
            .finish()
    }
}
