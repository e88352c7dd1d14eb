//! AES-128/192/256 block cipher with ECB, CBC, CFB, OFB and CTR modes of operation.
//!
//! The key length selects the variant. Use [Cipher] to reuse an expanded key across
//! messages, or the free functions ([encrypt_cbc], [decrypt_ctr], ...) for one-shot calls.
//!
//! ```
//! # fn main() -> aesmodes::Result<()> {
//! let key = aesmodes::generate_key(aesmodes::KeySize::Bits128)?;
//! let iv = aesmodes::generate_iv()?;
//! let ct = aesmodes::encrypt_ofb(b"any length works", &key, &iv)?;
//! assert_eq!(aesmodes::decrypt_ofb(&ct, &key, &iv)?, b"any length works");
//! # Ok(())
//! # }
//! ```

mod aesmodes;

pub use aesmodes::{
    BLOCK_SIZE, Cipher, Error, Key, KeySchedule, KeySize, PARALLEL_THRESHOLD, Result, decrypt,
    decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb, decrypt_ofb, encrypt, encrypt_cbc,
    encrypt_cfb, encrypt_ctr, encrypt_ecb, encrypt_ofb, generate_iv, generate_iv_with,
    generate_key, generate_key_with, secure_erase,
};
