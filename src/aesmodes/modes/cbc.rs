use rayon::prelude::*;
use tracing::trace;

use crate::aesmodes::core::{decrypt_block, encrypt_block};
use crate::aesmodes::error::*;
use crate::aesmodes::modes::util::{
    PARALLEL_THRESHOLD, check_block_multiple, pad, unpad, xor_in_place,
};

/// Core CBC encryption algorithm. PKCS#7 pads the plaintext; each block is XOR'd with the
/// previous ciphertext block (the IV for the first) before encryption. Inherently serial.
pub fn cbc_core_enc(plaintext: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut buf = pad(plaintext);
    let mut prev = *iv;

    for chunk in buf.chunks_exact_mut(16) {
        let mut block = prev;
        xor_in_place(&mut block, chunk);
        prev = encrypt_block(&block, round_keys);
        chunk.copy_from_slice(&prev);
    }

    buf
}

/// Core CBC decryption algorithm. Takes round keys in decryption order.
/// Every plaintext block depends only on two ciphertext blocks, so large inputs are
/// decrypted in parallel.
pub fn cbc_core_dec(
    ciphertext: &[u8],
    inv_round_keys: &[[u8; 16]],
    iv: &[u8; 16],
) -> Result<Vec<u8>> {
    check_block_multiple(ciphertext.len(), "CBC ciphertext not a multiple of 16 bytes")?;

    let mut plaintext = vec![0u8; ciphertext.len()];

    let dec = |(i, (pt, ct)): (usize, (&mut [u8], &[u8]))| {
        let prev: &[u8] = if i == 0 {
            iv
        } else {
            &ciphertext[(i - 1) * 16..i * 16]
        };
        let mut block = [0u8; 16];
        block.copy_from_slice(ct);
        let mut out = decrypt_block(&block, inv_round_keys);
        xor_in_place(&mut out, prev);
        pt.copy_from_slice(&out);
    };

    if ciphertext.len() > PARALLEL_THRESHOLD {
        trace!(len = ciphertext.len(), "CBC decrypting in parallel");
        plaintext
            .par_chunks_exact_mut(16)
            .zip(ciphertext.par_chunks_exact(16))
            .enumerate()
            .for_each(dec);
    } else {
        plaintext
            .chunks_exact_mut(16)
            .zip(ciphertext.chunks_exact(16))
            .enumerate()
            .for_each(dec);
    }

    unpad(&mut plaintext)?;
    Ok(plaintext)
}
