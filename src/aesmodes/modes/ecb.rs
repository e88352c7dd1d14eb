use crate::aesmodes::core::{decrypt_block, encrypt_block};
use crate::aesmodes::error::*;
use crate::aesmodes::modes::util::{check_block_multiple, map_blocks, pad, unpad};

/// Core ECB encryption algorithm. PKCS#7 pads the plaintext, then encrypts each 16-byte
/// block independently.
pub fn ecb_core_enc(plaintext: &[u8], round_keys: &[[u8; 16]]) -> Vec<u8> {
    let mut buf = pad(plaintext);
    map_blocks(&mut buf, |block| encrypt_block(block, round_keys));
    buf
}

/// Core ECB decryption algorithm. Takes round keys in decryption order. Decrypts each
/// 16-byte block independently, then validates and strips PKCS#7 padding.
pub fn ecb_core_dec(ciphertext: &[u8], inv_round_keys: &[[u8; 16]]) -> Result<Vec<u8>> {
    // ECB ciphertext should (and must) always be a multiple of 16 bytes.
    check_block_multiple(ciphertext.len(), "ECB ciphertext not a multiple of 16 bytes")?;

    let mut buf = ciphertext.to_vec();
    map_blocks(&mut buf, |block| decrypt_block(block, inv_round_keys));
    unpad(&mut buf)?;
    Ok(buf)
}
