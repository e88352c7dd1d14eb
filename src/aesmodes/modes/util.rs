use rayon::prelude::*;
use tracing::trace;

use crate::aesmodes::error::{Error, Result};
use crate::aesmodes::key::BLOCK_SIZE;

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if input size gt 4 KiB

/// PKCS#7 padding to a multiple of 16 bytes. Always adds 1 to 16 bytes.
pub(crate) fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;

    let mut out = Vec::with_capacity(plaintext.len() + pad_len);
    out.extend_from_slice(plaintext);
    out.resize(plaintext.len() + pad_len, pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding.
pub(crate) fn unpad(input: &mut Vec<u8>) -> Result<()> {
    let pad = match input.last() {
        Some(&b) => b as usize,
        None => return Err(Error::InvalidPadding),
    };

    if pad == 0 || pad > BLOCK_SIZE || pad > input.len() {
        return Err(Error::InvalidPadding);
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidPadding);
    }

    input.truncate(start);
    Ok(())
}

/// ECB and CBC ciphertext must be a non-empty multiple of 16 bytes.
pub(crate) fn check_block_multiple(len: usize, context: &'static str) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockSize { len, context });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn xor_in_place(block: &mut [u8; 16], other: &[u8]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// XORs `chunk` (1-16 bytes) with the matching prefix of `keystream` into `out`.
#[inline(always)]
pub(crate) fn xor_keystream(out: &mut [u8], chunk: &[u8], keystream: &[u8; 16]) {
    for ((o, c), k) in out.iter_mut().zip(chunk).zip(keystream) {
        *o = c ^ k;
    }
}

/// Counter block `offset` positions after `iv`, treating the IV as a big-endian
/// 128-bit integer. Wraps around on overflow.
#[inline(always)]
pub(crate) fn counter_block(iv: &[u8; 16], offset: u128) -> [u8; 16] {
    u128::from_be_bytes(*iv).wrapping_add(offset).to_be_bytes()
}

/// Replaces every 16-byte block of `buf` with `op(block)`. `buf.len()` must be a multiple
/// of 16. Runs on the rayon pool when the buffer exceeds [PARALLEL_THRESHOLD].
pub(crate) fn map_blocks<F>(buf: &mut [u8], op: F)
where
    F: Fn(&[u8; 16]) -> [u8; 16] + Sync,
{
    let apply = |chunk: &mut [u8]| {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&op(&block));
    };

    if buf.len() > PARALLEL_THRESHOLD {
        trace!(len = buf.len(), "mapping blocks in parallel");
        buf.par_chunks_exact_mut(BLOCK_SIZE).for_each(apply);
    } else {
        buf.chunks_exact_mut(BLOCK_SIZE).for_each(apply);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_then_unpad_recovers_input() {
        for len in 0..=48 {
            let data: Vec<u8> = (0..len as u8).collect();
            let mut padded = pad(&data);
            assert_eq!(padded.len() % 16, 0);
            assert!(padded.len() > data.len());
            assert!(padded.len() - data.len() <= 16);
            unpad(&mut padded).expect("valid padding rejected");
            assert_eq!(padded, data);
        }
    }

    #[test]
    fn full_block_gets_full_padding_block() {
        let padded = pad(&[0u8; 16]);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn unpad_rejects_zero_pad_byte() {
        let mut data = vec![0x41u8; 16];
        data[15] = 0x00;
        assert!(matches!(unpad(&mut data), Err(Error::InvalidPadding)));
        assert_eq!(data.len(), 16, "input must not be truncated on failure");
    }

    #[test]
    fn unpad_rejects_pad_byte_above_block_size() {
        let mut data = vec![0x11u8; 32];
        assert!(matches!(unpad(&mut data), Err(Error::InvalidPadding)));
    }

    #[test]
    fn unpad_rejects_inconsistent_trailing_bytes() {
        let mut data = vec![0x41u8; 16];
        data[13] = 0x03;
        data[14] = 0x02;
        data[15] = 0x03;
        assert!(matches!(unpad(&mut data), Err(Error::InvalidPadding)));
    }

    #[test]
    fn unpad_rejects_empty_input() {
        let mut data = Vec::new();
        assert!(matches!(unpad(&mut data), Err(Error::InvalidPadding)));
    }

    #[test]
    fn counter_block_increments_big_endian() {
        let mut iv = [0u8; 16];
        iv[15] = 0xff;
        let next = counter_block(&iv, 1);
        assert_eq!(next[14], 0x01);
        assert_eq!(next[15], 0x00);
    }

    #[test]
    fn counter_block_wraps_around() {
        let iv = [0xffu8; 16];
        assert_eq!(counter_block(&iv, 1), [0u8; 16]);
        assert_eq!(counter_block(&iv, 3)[15], 0x02);
    }

    #[test]
    fn block_multiple_check() {
        assert!(check_block_multiple(32, "test").is_ok());
        assert!(matches!(
            check_block_multiple(0, "test"),
            Err(Error::InvalidBlockSize { len: 0, .. })
        ));
        assert!(matches!(
            check_block_multiple(17, "test"),
            Err(Error::InvalidBlockSize { len: 17, .. })
        ));
    }
}
