use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Computes `base^exp mod modulus`.
///
/// A zero modulus means the group was never given a prime and is reported as
/// [`Error::InvalidGroup`] rather than reaching `modpow`, which panics on it.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidGroup);
    }

    Ok(base.modpow(exp, modulus))
}

/// Draws a uniformly distributed integer in `[0, bound)`.
///
/// Reads `ceil(bits(bound - 1) / 8)` bytes per attempt, masks the excess high
/// bits of the leading byte and rejects candidates `>= bound`. Each attempt
/// succeeds with probability above one half. A failed read is returned
/// immediately; nothing is retried.
pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidGroup);
    }

    let max = bound - 1u32;
    let bits = max.bits();
    if bits == 0 {
        return Ok(BigUint::zero());
    }

    let len = bits.div_ceil(8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        n => n as u32,
    };
    let mask = 0xFFu8 >> (8 - top_bits);

    let mut buf = Zeroizing::new(vec![0u8; len]);
    loop {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}
