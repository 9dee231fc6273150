mod common;

use common::{exchange, init_tracing, Peer};
use dhkx::{lookup, DhGroup, DhKey, Error, GroupId};
use num_bigint::BigUint;

#[test]
fn key_exchange_default_group() {
    init_tracing();
    let group = lookup(GroupId::DEFAULT).expect("default group should exist");

    let (k1, k2) = exchange(&group);
    assert_eq!(k1, k2, "both peers must derive the same secret");
    assert_eq!(k1.len(), 256);
}

#[test]
fn key_exchange_every_registered_group() {
    for id in GroupId::KNOWN {
        let group = lookup(id).expect("registered group");
        let (k1, k2) = exchange(&group);
        assert_eq!(k1, k2, "secrets differ for group {id}");
        assert_eq!(k1.len(), group.public_len());
    }
}

#[test]
fn custom_group_key_exchange() {
    let p = BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A63A36210000000000090563",
        16,
    )
    .expect("valid hex");
    let group = DhGroup::custom(p, BigUint::from(2u32));

    let (k1, k2) = exchange(&group);
    assert_eq!(k1, k2);
}

#[test]
fn secrets_differ_between_sessions() {
    let group = lookup(GroupId::OAKLEY_2).unwrap();
    let (first, _) = exchange(&group);
    let (second, _) = exchange(&group);
    assert_ne!(first, second);
}

#[test]
fn received_key_has_no_group_until_bound() {
    let group = lookup(GroupId::OAKLEY_1).unwrap();
    let mut peer = Peer::new(&group);
    let other = Peer::new(&group);
    peer.receive(&other.wire_public());

    let received = peer.received.as_ref().unwrap();
    assert!(received.group().is_none());
    assert!(!received.is_private_key());

    let bound = received
        .clone()
        .with_group(group.clone())
        .expect("peer value is below the prime");
    assert_eq!(bound.marshal_public(), other.wire_public());
}

#[test]
fn oversized_value_cannot_be_bound_to_group() {
    let group = lookup(GroupId::OAKLEY_1).unwrap();
    let wide = BigUint::from(1u32) << 800u32;
    let received = DhKey::from_public_bytes(&wide.to_bytes_be());

    assert!(matches!(
        received.clone().with_group(group.clone()),
        Err(Error::PublicKeyOutOfRange)
    ));
    assert!(received.marshal_public().len() > group.public_len());
}

#[test]
fn groups_and_keys_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DhGroup>();
    assert_send_sync::<DhKey>();
}

#[test]
fn group_shared_across_threads() {
    let group = lookup(GroupId::OAKLEY_1).unwrap();
    let own = group.generate_private_key_default().unwrap();

    let handle = std::thread::spawn({
        let group = group.clone();
        move || group.generate_private_key_default().unwrap()
    });
    let peer = handle.join().unwrap();

    let k1 = group.compute_key(&peer, &own).unwrap();
    let k2 = group.compute_key(&own, &peer).unwrap();
    assert_eq!(k1, k2);
}

#[test]
fn shared_secret_is_public_only_and_bound_to_group() {
    let group = lookup(GroupId::OAKLEY_1).unwrap();
    let a = group.generate_private_key_default().unwrap();
    let b = group.generate_private_key_default().unwrap();

    let secret = group
        .compute_key(&DhKey::from_public_bytes(&b.marshal_public()), &a)
        .unwrap();
    assert!(!secret.is_private_key());
    assert_eq!(secret.group(), Some(&group));
    assert_eq!(
        secret.marshal_public_string(),
        secret.public_value().unwrap().to_string()
    );
}

#[test]
fn full_key_may_serve_as_peer() {
    let group = lookup(GroupId::OAKLEY_2).unwrap();
    let a = group.generate_private_key_default().unwrap();
    let b = group.generate_private_key_default().unwrap();

    let direct = group.compute_key(&b, &a).unwrap();
    let via_wire = group
        .compute_key(&DhKey::from_public_bytes(&b.marshal_public()), &a)
        .unwrap();
    assert_eq!(direct.marshal_public(), via_wire.marshal_public());
}
