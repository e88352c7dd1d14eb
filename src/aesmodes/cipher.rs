use tracing::debug;

use crate::aesmodes::core::{decrypt_block, encrypt_block};
use crate::aesmodes::error::{Error, Result};
use crate::aesmodes::key::{BLOCK_SIZE, Key, KeySize};
use crate::aesmodes::modes::*;
use crate::aesmodes::schedule::KeySchedule;

/// Provides encryption and decryption functions for a single AES block and for modes
/// [ECB](crate::Cipher::encrypt_ecb), [CBC](crate::Cipher::encrypt_cbc),
/// [CFB](crate::Cipher::encrypt_cfb), [OFB](crate::Cipher::encrypt_ofb), and
/// [CTR](crate::Cipher::encrypt_ctr).
///
/// Instantiated with an AES [Key], which is expanded into round keys once and stored in
/// the instance together with the same round keys in decryption order. The key size
/// (AES-128/192/256) travels with the schedule; nothing is stored process-wide, so a
/// `Cipher` can be shared across threads by reference.
///
/// ## Examples
/// ```
/// # fn main() -> aesmodes::Result<()> {
/// use aesmodes::{Cipher, Key, KeySize, generate_iv};
///
/// let key = Key::random(KeySize::Bits256)?;
/// let cipher = Cipher::new(&key);
/// let iv = generate_iv()?;
///
/// let ciphertext = cipher.encrypt_cbc(b"Hello, World!", &iv)?;
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(cipher.decrypt_cbc(&ciphertext, &iv)?, b"Hello, World!");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Cipher {
    schedule: KeySchedule,
    inverse: KeySchedule,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        let schedule = KeySchedule::expand(key);
        let inverse = schedule.reversed();
        Self { schedule, inverse }
    }

    /// Builds a cipher from raw key bytes (16, 24, or 32 long).
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Key::try_from_slice(key)?))
    }

    /// Builds a cipher from a previously derived schedule in forward order.
    /// Fails with [InvalidKeySchedule](Error::InvalidKeySchedule) if its round key count
    /// does not match its key size.
    pub fn from_schedule(schedule: KeySchedule) -> Result<Self> {
        schedule.validate()?;
        let inverse = schedule.reversed();
        Ok(Self { schedule, inverse })
    }

    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Getter for internal round keys in forward order.
    pub fn round_keys(&self) -> &[[u8; 16]] {
        self.schedule.round_keys()
    }

    /// Encrypts exactly one 16-byte block. Fails with
    /// [InvalidBlockSize](Error::InvalidBlockSize) for any other length.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        let block = as_block(block)?;
        Ok(encrypt_block(&block, self.schedule.round_keys()))
    }

    /// Decrypts exactly one 16-byte block.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        let block = as_block(block)?;
        Ok(decrypt_block(&block, self.inverse.round_keys()))
    }

    /// **Electronic codebook** encryption.
    ///
    /// PKCS#7 pads the plaintext and encrypts each 16-byte block entirely independently.
    /// **Identical plaintext blocks produce identical ciphertext blocks.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let ciphertext = ecb_core_enc(plaintext, self.schedule.round_keys());
        self.log("ECB", "encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// **Electronic codebook** decryption. Ciphertext must be a non-empty multiple of
    /// 16 bytes with valid PKCS#7 padding.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let plaintext = ecb_core_dec(ciphertext, self.inverse.round_keys())?;
        self.log("ECB", "decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// **Cipher block chaining** encryption.
    ///
    /// PKCS#7 pads the plaintext. Each plaintext block is `XOR`'d with the previous
    /// ciphertext block (the IV for the first) before encryption.
    ///
    /// **Important**: the IV must be unpredictable and never reused with the same key.
    pub fn encrypt_cbc(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let ciphertext = cbc_core_enc(plaintext, self.schedule.round_keys(), &iv);
        self.log("CBC", "encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// **Cipher block chaining** decryption.
    pub fn decrypt_cbc(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let plaintext = cbc_core_dec(ciphertext, self.inverse.round_keys(), &iv)?;
        self.log("CBC", "decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// **Cipher feedback** encryption with 128-bit segments.
    ///
    /// The previous ciphertext block (the IV for the first) is encrypted and `XOR`'d with
    /// the plaintext. No padding; output length equals input length.
    pub fn encrypt_cfb(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let ciphertext = cfb_core_enc(plaintext, self.schedule.round_keys(), &iv);
        self.log("CFB", "encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// **Cipher feedback** decryption.
    pub fn decrypt_cfb(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let plaintext = cfb_core_dec(ciphertext, self.schedule.round_keys(), &iv);
        self.log("CFB", "decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// **Output feedback** encryption.
    ///
    /// The keystream is the IV encrypted repeatedly. No padding; output length equals
    /// input length.
    ///
    /// **Important**: reusing a key and IV pair reuses the keystream.
    pub fn encrypt_ofb(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let ciphertext = ofb_core(plaintext, self.schedule.round_keys(), &iv);
        self.log("OFB", "encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// **Output feedback** decryption. Identical to encryption.
    pub fn decrypt_ofb(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let plaintext = ofb_core(ciphertext, self.schedule.round_keys(), &iv);
        self.log("OFB", "decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// **Counter mode** encryption.
    ///
    /// For each 16-byte block of plaintext:
    /// 1. The 16-byte IV, read as a big-endian integer, is incremented by the block index
    ///    (wrapping at 2^128).
    /// 2. The counter block is encrypted using the round keys.
    /// 3. The plaintext block is `XOR`'d with the encrypted counter block.
    ///
    /// **Important**: a counter value must never repeat under the same key.
    pub fn encrypt_ctr(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let ciphertext = ctr_core(plaintext, self.schedule.round_keys(), &iv);
        self.log("CTR", "encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// **Counter mode** decryption. Identical to encryption.
    pub fn decrypt_ctr(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = as_iv(iv)?;
        let plaintext = ctr_core(ciphertext, self.schedule.round_keys(), &iv);
        self.log("CTR", "decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    fn log(&self, mode: &'static str, direction: &'static str, in_len: usize, out_len: usize) {
        debug!(
            mode,
            direction,
            key_size = %self.key_size(),
            in_len,
            out_len,
            "{} {} complete",
            mode,
            direction
        );
    }
}

fn as_block(block: &[u8]) -> Result<[u8; 16]> {
    block.try_into().map_err(|_| Error::InvalidBlockSize {
        len: block.len(),
        context: "single block operation requires exactly 16 bytes",
    })
}

fn as_iv(iv: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    iv.try_into()
        .map_err(|_| Error::InvalidIv { len: iv.len() })
}
