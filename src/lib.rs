//! Finite-field Diffie-Hellman key exchange.
//!
//! Two parties agree on a group (usually by id, see [`lookup`]), each generates
//! a key pair, swaps the fixed-width public value, and derives the same shared
//! secret:
//!
//! ```rust
//! use dhkx::{lookup, DhKey, GroupId};
//!
//! let group = lookup(GroupId::MODP_2048).unwrap();
//! let alice = group.generate_private_key_default().unwrap();
//! let bob = group.generate_private_key_default().unwrap();
//!
//! let from_bob = DhKey::from_public_bytes(&bob.marshal_public());
//! let from_alice = DhKey::from_public_bytes(&alice.marshal_public());
//!
//! let k1 = group.compute_key(&from_bob, &alice).unwrap();
//! let k2 = group.compute_key(&from_alice, &bob).unwrap();
//! assert_eq!(k1.marshal_public(), k2.marshal_public());
//! ```
//!
//! The shared secret is the raw group element. Run it through a KDF before
//! using it as symmetric key material.

/// Configuration for the command line front end.
#[cfg(feature = "cli")]
pub mod config;
/// Big-integer helpers and wiped storage for key material.
pub mod crypto;
/// Error types.
pub mod error;
/// Groups, keys and shared-secret computation.
pub mod exchange;
/// Registry of RFC 2409 / RFC 3526 groups.
pub mod groups;

pub use error::Error;
pub use exchange::{DhGroup, DhKey};
pub use groups::{lookup, GroupId};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
