#![no_main]

use std::sync::LazyLock;

use dhkx::{lookup, DhGroup, DhKey, Error, GroupId};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

static GROUP: LazyLock<DhGroup> =
    LazyLock::new(|| lookup(GroupId::OAKLEY_1).expect("group 1 is registered"));

fuzz_target!(|data: &[u8]| {
    let group = &*GROUP;
    let own = group
        .key_from_private(BigUint::from(0x1234_5678u32))
        .expect("exponent is in range");
    let peer = DhKey::from_public_bytes(data);

    let in_range = peer
        .public_value()
        .is_some_and(|y| y.bits() > 0 && y < group.prime());

    match group.compute_key(&peer, &own) {
        Ok(secret) => {
            assert!(in_range);
            assert_eq!(secret.marshal_public().len(), group.public_len());
        }
        Err(Error::PublicKeyOutOfRange) => assert!(!in_range),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
