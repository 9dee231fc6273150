#![no_main]

use dhkx::DhKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let key = DhKey::from_public_bytes(data);
    let again = DhKey::from_public_bytes(&key.marshal_public());
    assert_eq!(key.public_value(), again.public_value());
});
