use rayon::prelude::*;
use tracing::trace;

use crate::aesmodes::core::encrypt_block;
use crate::aesmodes::modes::util::{PARALLEL_THRESHOLD, counter_block, xor_keystream};

/// Core counter mode encryption and decryption algorithm (CTR is symmetric).
/// Dispatches to the parallel implementation for inputs above [PARALLEL_THRESHOLD].
pub fn ctr_core(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    if input.len() > PARALLEL_THRESHOLD {
        trace!(len = input.len(), "CTR processing in parallel");
        ctr_core_parallel(input, round_keys, iv)
    } else {
        ctr_core_serial(input, round_keys, iv)
    }
}

/// Block `i` is XOR'd with the encryption of `iv + i` (big-endian, wrapping).
pub fn ctr_core_parallel(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            let block = counter_block(iv, i as u128);
            let keystream = encrypt_block(&block, round_keys);
            xor_keystream(out_chunk, in_chunk, &keystream);
        });

    output
}

pub fn ctr_core_serial(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    let mut ctr = *iv;

    // for each chunk of input...
    for (out_chunk, in_chunk) in output.chunks_mut(16).zip(input.chunks(16)) {
        // xor each element of input chunk (1-16 bytes) with encrypted ctr block
        let keystream = encrypt_block(&ctr, round_keys);
        xor_keystream(out_chunk, in_chunk, &keystream);
        // increment ctr, wrapping at 2^128
        ctr = counter_block(&ctr, 1);
    }

    output
}
