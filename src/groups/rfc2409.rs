//! Oakley groups from RFC 2409, section 6.

use std::sync::LazyLock;

use num_bigint::BigUint;

/// First Oakley group: 768-bit MODP, generator 2.
pub static OAKLEY_1_P: LazyLock<BigUint> = LazyLock::new(|| super::parse_hex(OAKLEY_1_HEX));

/// Second Oakley group: 1024-bit MODP, generator 2.
pub static OAKLEY_2_P: LazyLock<BigUint> = LazyLock::new(|| super::parse_hex(OAKLEY_2_HEX));

const OAKLEY_1_HEX: &str = "\
FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
4FE1356D6D51C245E485B576625E7EC6F44C42E9A63A3620FFFFFFFFFFFFFFFF";

const OAKLEY_2_HEX: &str = "\
FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381FFFFFFFFFFFFFFFF";
