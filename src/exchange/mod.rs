//! Groups, keys and the shared-secret computation.

/// Group parameters, key generation and shared-secret derivation.
pub mod group;
/// Key pairs and public-value serialization.
pub mod key;
/// Fixed-width big-endian encoding helpers.
pub mod wire;

pub use group::DhGroup;
pub use key::DhKey;
