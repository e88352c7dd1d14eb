//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits,
//! the [`KeySize`] that fixes the cipher parameters (Nk, Nr), and helpers for
//! generating keys and IVs and erasing sensitive buffers.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, TryRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesmodes::error::{Error, Result};

/// AES block size in bytes. Also the IV length for every mode that takes one.
pub const BLOCK_SIZE: usize = 16;

/// AES variant, selected by key length. Carries the matched pair of cipher parameters:
/// `Nk` (key length in 32-bit words) and `Nr` (number of rounds).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key size for a key of `len` bytes. Fails with [InvalidKeySize](Error::InvalidKeySize)
    /// unless `len` is 16, 24, or 32.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Bits128),
            24 => Ok(Self::Bits192),
            32 => Ok(Self::Bits256),
            _ => Err(Error::InvalidKeySize { len }),
        }
    }

    /// Key size for a bit length of 128, 192, or 256.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            192 => Ok(Self::Bits192),
            256 => Ok(Self::Bits256),
            _ => Err(Error::UnsupportedKeyBits { bits }),
        }
    }

    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Number of 32-bit words in the key.
    pub const fn nk(self) -> usize {
        match self {
            Self::Bits128 => 4,
            Self::Bits192 => 6,
            Self::Bits256 => 8,
        }
    }

    /// Number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively.
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Round keys produced by the key schedule, including the initial one.
    pub const fn round_key_count(self) -> usize {
        self.nr() + 1
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

#[derive(Clone, PartialEq, Eq, Zeroize)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` object is required to instantiate a [Cipher](crate::Cipher).
/// Key bytes are zeroized when the key is dropped.
///
/// ## Examples
/// ```
/// # fn main() -> aesmodes::Result<()> {
/// use aesmodes::{Key, KeySize};
///
/// // Instantiate random keys:
/// let rk_128 = Key::random(KeySize::Bits128)?;
/// let rk_256 = Key::random(KeySize::Bits256)?;
/// assert_eq!(rk_128.size(), KeySize::Bits128);
/// assert_eq!(rk_256.as_bytes().len(), 32);
///
/// // Instantiate keys from slice:
/// let key_bytes = [0x2Bu8; 32];
/// let my_key_192 = Key::try_from_slice(&key_bytes[..24])?;
/// assert_eq!(my_key_192.as_bytes(), &key_bytes[..24]);
///
/// // Attempting to instantiate with an invalid key size (not 16, 24, or 32 bytes)
/// // returns an InvalidKeySize error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random key from the OS RNG. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k[..size.key_len()])?;
        let key = Self::try_from_slice(&k[..size.key_len()]);
        k.zeroize();
        key
    }

    /// Generate a random key from a caller supplied cryptographic RNG.
    pub fn random_with<R: CryptoRng + ?Sized>(size: KeySize, rng: &mut R) -> Self {
        let bytes = match size {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                rng.fill_bytes(&mut k);
                KeyBytes::K128(k)
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                rng.fill_bytes(&mut k);
                KeyBytes::K192(k)
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                rng.fill_bytes(&mut k);
                KeyBytes::K256(k)
            }
        };
        Self { bytes }
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeySize error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeySize { len: bytes.len() };
        let bytes = match KeySize::from_key_len(bytes.len())? {
            KeySize::Bits128 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            KeySize::Bits192 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            KeySize::Bits256 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

/// Random key bytes for `size`, from the OS RNG.
pub fn generate_key(size: KeySize) -> Result<Vec<u8>> {
    let mut key = vec![0u8; size.key_len()];
    OsRng.try_fill_bytes(&mut key)?;
    Ok(key)
}

/// Random key bytes for `size`, from a caller supplied cryptographic RNG.
pub fn generate_key_with<R: CryptoRng + ?Sized>(size: KeySize, rng: &mut R) -> Vec<u8> {
    let mut key = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key);
    key
}

/// Random 16-byte IV from the OS RNG.
///
/// **Important**: an IV must never be reused with the same key.
pub fn generate_iv() -> Result<[u8; BLOCK_SIZE]> {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

/// Random 16-byte IV from a caller supplied cryptographic RNG.
pub fn generate_iv_with<R: CryptoRng + ?Sized>(rng: &mut R) -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);
    iv
}

/// Overwrites `buf` with zeros.
///
/// Best effort only: the write goes through `zeroize`, which prevents the compiler from
/// eliding it, but copies made earlier (moves, reallocations, swap) are not reached.
pub fn secure_erase(buf: &mut [u8]) {
    buf.zeroize();
}
