//! Error types for Diffie-Hellman key exchange

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested group identifier is not in the registry.
    #[error("DH: unknown group {0}")]
    UnknownGroup(i32),

    /// The random source failed while drawing a private exponent.
    #[error("DH: random source failure: {0}")]
    RandomSourceFailure(#[from] rand_core::Error),

    /// The group has no usable prime modulus.
    #[error("DH: invalid group")]
    InvalidGroup,

    /// The peer key carries no public value.
    #[error("DH: invalid public key")]
    InvalidPublicKey,

    /// The local key carries no private exponent.
    #[error("DH: invalid private key")]
    InvalidPrivateKey,

    /// The peer public value lies outside `[1, p)`.
    #[error("DH: public key out of range")]
    PublicKeyOutOfRange,
}
