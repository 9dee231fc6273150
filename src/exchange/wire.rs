//! Byte-level encoding of public values.

use num_bigint::BigUint;

/// Encodes `value` big-endian into exactly `width` bytes, zero-padded on the left.
///
/// If the minimal encoding is longer than `width` the value cannot belong to
/// the group it is being encoded for; the minimal encoding is returned as is
/// so no information is silently truncated.
pub fn to_fixed_be(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = to_minimal_be(value);
    if bytes.len() >= width {
        return bytes;
    }

    let mut out = vec![0u8; width];
    copy_with_left_pad(&mut out, &bytes);
    out
}

/// Minimal big-endian encoding. Zero encodes as the empty string.
pub fn to_minimal_be(value: &BigUint) -> Vec<u8> {
    crate::crypto::minimal_be(value)
}

/// Copies `src` to the tail of `dest` and zeroes the bytes in front of it.
fn copy_with_left_pad(dest: &mut [u8], src: &[u8]) {
    let pad = dest.len() - src.len();
    dest[..pad].fill(0);
    dest[pad..].copy_from_slice(src);
}
