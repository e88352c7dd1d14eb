use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build an AES key from a slice that is not 16, 24, or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeySize { len: usize },

    /// Requested key generation for a bit size other than 128, 192, or 256.
    #[error("unsupported key size: {bits} bits (expected 128, 192, or 256)")]
    UnsupportedKeyBits { bits: usize },

    /// IV supplied to CBC, CFB, OFB, or CTR was not 16 bytes long.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIv { len: usize },

    /// Input did not fit the block structure required by the operation.
    #[error("invalid block size: {len} bytes ({context})")]
    InvalidBlockSize { len: usize, context: &'static str },

    /// PKCS#7 padding of decrypted ECB/CBC plaintext was malformed.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// Round key count does not match the number of rounds for the key size.
    #[error("invalid key schedule: {actual} round keys (expected {expected})")]
    InvalidKeySchedule { expected: usize, actual: usize },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
