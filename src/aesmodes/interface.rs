//! Byte-slice convenience API. Every function expands the key, runs one operation and
//! drops (zeroizes) the schedule. Callers encrypting many messages under one key should
//! build a [Cipher] once instead.

use crate::aesmodes::cipher::Cipher;
use crate::aesmodes::error::Result;

/// Encrypts a single 16-byte block. The key length (16, 24, or 32) selects AES-128/192/256.
pub fn encrypt(block: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ok(Cipher::from_slice(key)?.encrypt_block(block)?.to_vec())
}

/// Decrypts a single 16-byte block.
pub fn decrypt(block: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ok(Cipher::from_slice(key)?.decrypt_block(block)?.to_vec())
}

pub fn encrypt_ecb(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.encrypt_ecb(plaintext)
}

pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.decrypt_ecb(ciphertext)
}

pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.encrypt_cbc(plaintext, iv)
}

pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.decrypt_cbc(ciphertext, iv)
}

pub fn encrypt_cfb(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.encrypt_cfb(plaintext, iv)
}

pub fn decrypt_cfb(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.decrypt_cfb(ciphertext, iv)
}

pub fn encrypt_ofb(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.encrypt_ofb(plaintext, iv)
}

pub fn decrypt_ofb(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.decrypt_ofb(ciphertext, iv)
}

pub fn encrypt_ctr(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.encrypt_ctr(plaintext, iv)
}

pub fn decrypt_ctr(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    Cipher::from_slice(key)?.decrypt_ctr(ciphertext, iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aesmodes::error::Error;

    #[test]
    fn zero_key_known_answer() -> Result<()> {
        let ct = encrypt(&[0u8; 16], &[0u8; 16])?;
        assert_eq!(hex::encode(&ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
        assert_eq!(decrypt(&ct, &[0u8; 16])?, vec![0u8; 16]);
        Ok(())
    }

    #[test]
    fn rejects_bad_key_length_in_every_mode() {
        let key = [0u8; 20];
        let iv = [0u8; 16];
        let bad = |r: Result<Vec<u8>>| matches!(r, Err(Error::InvalidKeySize { len: 20 }));
        assert!(bad(encrypt(&[0u8; 16], &key)));
        assert!(bad(decrypt(&[0u8; 16], &key)));
        assert!(bad(encrypt_ecb(b"abc", &key)));
        assert!(bad(decrypt_ecb(&[0u8; 16], &key)));
        assert!(bad(encrypt_cbc(b"abc", &key, &iv)));
        assert!(bad(decrypt_cbc(&[0u8; 16], &key, &iv)));
        assert!(bad(encrypt_cfb(b"abc", &key, &iv)));
        assert!(bad(decrypt_cfb(b"abc", &key, &iv)));
        assert!(bad(encrypt_ofb(b"abc", &key, &iv)));
        assert!(bad(decrypt_ofb(b"abc", &key, &iv)));
        assert!(bad(encrypt_ctr(b"abc", &key, &iv)));
        assert!(bad(decrypt_ctr(b"abc", &key, &iv)));
    }

    #[test]
    fn block_functions_require_one_block() {
        assert!(matches!(
            encrypt(b"not sixteen", &[0u8; 16]),
            Err(Error::InvalidBlockSize { len: 11, .. })
        ));
    }

    #[test]
    fn chained_modes_hide_repeated_blocks() -> Result<()> {
        let key = [0x2bu8; 24];
        let iv = [0x01u8; 16];
        let plaintext = [0x41u8; 32];

        let ecb = encrypt_ecb(&plaintext, &key)?;
        assert_eq!(ecb[..16], ecb[16..32]);

        for ct in [
            encrypt_cbc(&plaintext, &key, &iv)?,
            encrypt_cfb(&plaintext, &key, &iv)?,
            encrypt_ofb(&plaintext, &key, &iv)?,
            encrypt_ctr(&plaintext, &key, &iv)?,
        ] {
            assert_ne!(ct[..16], ct[16..32]);
        }
        Ok(())
    }
}
