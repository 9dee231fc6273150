use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRngCore, OsRng};
use tracing::{debug, trace};

use super::DhKey;
use crate::crypto::{mod_pow, random_below};
use crate::{Error, Result};

struct Params {
    p: BigUint,
    g: BigUint,
}

/// A finite cyclic group for Diffie-Hellman: prime modulus `p` and generator `g`.
///
/// The parameters are fixed at construction and shared behind an [`Arc`], so
/// cloning a group (which every generated key does) is cheap and all clones
/// see the same values. Accessors hand out copies.
#[derive(Clone)]
pub struct DhGroup {
    params: Arc<Params>,
}

impl DhGroup {
    pub(crate) fn from_parts(p: BigUint, g: BigUint) -> Self {
        Self {
            params: Arc::new(Params { p, g }),
        }
    }

    /// Creates a group from caller-supplied parameters.
    ///
    /// # Security
    ///
    /// Neither the primality of `prime` nor the order of `generator` is
    /// checked. Behaviour of keys derived from a group whose modulus is not in
    /// fact prime is undefined. Prefer [`lookup`](crate::lookup) unless the
    /// parameters come from a trusted source.
    pub fn custom(prime: BigUint, generator: BigUint) -> Self {
        Self::from_parts(prime, generator)
    }

    /// Returns a copy of the prime modulus.
    pub fn prime(&self) -> BigUint {
        self.params.p.clone()
    }

    /// Returns a copy of the generator.
    pub fn generator(&self) -> BigUint {
        self.params.g.clone()
    }

    /// Bit length of the prime modulus.
    pub fn bit_len(&self) -> u64 {
        self.params.p.bits()
    }

    /// Width in bytes of a serialized public value for this group.
    pub fn public_len(&self) -> usize {
        self.bit_len().div_ceil(8) as usize
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.params.p
    }

    /// Generates a key pair using the platform random source.
    pub fn generate_private_key_default(&self) -> Result<DhKey> {
        self.generate_private_key(&mut OsRng)
    }

    /// Generates a key pair `(x, g^x mod p)` with `x` uniform in `(0, p)`.
    ///
    /// Zero draws are discarded and redrawn. A failing random source aborts
    /// generation with [`Error::RandomSourceFailure`].
    pub fn generate_private_key<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<DhKey> {
        let p = self.modulus();
        if p <= &BigUint::from(1u32) {
            return Err(Error::InvalidGroup);
        }

        let mut x = random_below(rng.as_rngcore(), p)?;
        while x.is_zero() {
            trace!("discarding zero private exponent");
            x = random_below(rng.as_rngcore(), p)?;
        }

        let y = mod_pow(&self.params.g, &x, p)?;
        debug!(bits = self.bit_len(), "generated DH key pair");

        Ok(DhKey::from_parts(Some(x), Some(y), Some(self.clone())))
    }

    /// Rebuilds a full key pair from a previously generated private exponent.
    ///
    /// # Errors
    /// [`Error::InvalidPrivateKey`] unless `0 < x < p`.
    pub fn key_from_private(&self, x: BigUint) -> Result<DhKey> {
        let p = self.modulus();
        if p.is_zero() {
            return Err(Error::InvalidGroup);
        }
        if x.is_zero() || &x >= p {
            return Err(Error::InvalidPrivateKey);
        }

        let y = mod_pow(&self.params.g, &x, p)?;
        Ok(DhKey::from_parts(Some(x), Some(y), Some(self.clone())))
    }

    /// Derives the shared secret `peer^x mod p` from a peer's public value and
    /// our own private exponent.
    ///
    /// The peer value must lie in `[1, p)`; anything else is rejected before
    /// exponentiation. The result is a public-only key bound to this group
    /// whose [`marshal_public`](DhKey::marshal_public) is the raw secret.
    pub fn compute_key(&self, peer: &DhKey, own: &DhKey) -> Result<DhKey> {
        let p = self.modulus();
        if p.is_zero() {
            return Err(Error::InvalidGroup);
        }

        let y = peer.public_value().ok_or(Error::InvalidPublicKey)?;
        if y.is_zero() || &y >= p {
            return Err(Error::PublicKeyOutOfRange);
        }

        let x = own.private_exponent().ok_or(Error::InvalidPrivateKey)?;

        let k = mod_pow(&y, &x, p)?;
        Ok(DhKey::from_parts(None, Some(k), Some(self.clone())))
    }
}

impl PartialEq for DhGroup {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
            || (self.params.p == other.params.p && self.params.g == other.params.g)
    }
}

impl Eq for DhGroup {}

impl fmt::Debug for DhGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhGroup")
            .field("bits", &self.bit_len())
            .field("g", &self.params.g)
            .finish_non_exhaustive()
    }
}
