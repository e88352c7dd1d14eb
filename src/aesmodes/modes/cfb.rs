use rayon::prelude::*;
use tracing::trace;

use crate::aesmodes::core::encrypt_block;
use crate::aesmodes::modes::util::{PARALLEL_THRESHOLD, xor_keystream};

/// Core CFB encryption (128-bit segments). The previous ciphertext block (the IV for the
/// first) is encrypted and XOR'd with the plaintext. A partial final block uses only the
/// needed prefix of the keystream, so output length equals input length.
pub fn cfb_core_enc(plaintext: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut ciphertext = vec![0u8; plaintext.len()];
    let mut feedback = *iv;

    for (ct, pt) in ciphertext.chunks_mut(16).zip(plaintext.chunks(16)) {
        let keystream = encrypt_block(&feedback, round_keys);
        xor_keystream(ct, pt, &keystream);
        // only a full block can feed the next one; a partial block is always the last
        feedback[..ct.len()].copy_from_slice(ct);
    }

    ciphertext
}

/// Core CFB decryption (128-bit segments). Uses the forward round keys. All feedback
/// blocks are ciphertext, so large inputs are decrypted in parallel.
pub fn cfb_core_dec(ciphertext: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut plaintext = vec![0u8; ciphertext.len()];

    let dec = |(i, (pt, ct)): (usize, (&mut [u8], &[u8]))| {
        let mut feedback = [0u8; 16];
        if i == 0 {
            feedback = *iv;
        } else {
            feedback.copy_from_slice(&ciphertext[(i - 1) * 16..i * 16]);
        }
        let keystream = encrypt_block(&feedback, round_keys);
        xor_keystream(pt, ct, &keystream);
    };

    if ciphertext.len() > PARALLEL_THRESHOLD {
        trace!(len = ciphertext.len(), "CFB decrypting in parallel");
        plaintext
            .par_chunks_mut(16)
            .zip(ciphertext.par_chunks(16))
            .enumerate()
            .for_each(dec);
    } else {
        plaintext
            .chunks_mut(16)
            .zip(ciphertext.chunks(16))
            .enumerate()
            .for_each(dec);
    }

    plaintext
}

#[cfg(test)]
mod test_cfb {
    use super::*;
    use crate::aesmodes::modes::util::test_util::{
        IV, KEY_128, KEY_192, KEY_256, PLAINTEXT, hex_to_bytes, long_input, schedule,
    };

    fn check_vector(key: &[u8], expected_hex: &str) {
        let keys = schedule(key);
        let expected = hex_to_bytes(expected_hex);

        let encrypted = cfb_core_enc(&PLAINTEXT, keys.round_keys(), &IV);
        assert_eq!(
            expected, encrypted,
            "encrypted result does not match expected"
        );

        let decrypted = cfb_core_dec(&expected, keys.round_keys(), &IV);
        assert_eq!(
            PLAINTEXT.to_vec(),
            decrypted,
            "decrypted result does not match expected"
        );
    }

    // SP 800-38A F.3.13 - F.3.18 (CFB128)
    #[test]
    fn aes_cfb_128() {
        check_vector(
            &KEY_128,
            "
        3b3fd92eb72dad20333449f8e83cfb4a\
        c8a64537a0b3a93fcde3cdad9f1ce58b\
        26751f67a3cbb140b1808cf187a4f4df\
        c04b05357c5d1c0eeac4c66f9ff7f2e6",
        );
    }

    #[test]
    fn aes_cfb_192() {
        check_vector(
            &KEY_192,
            "
        cdc80d6fddf18cab34c25909c99a4174\
        67ce7f7f81173621961a2b70171d3d7a\
        2e1e8a1dd59b88b1c8e60fed1efac4c9\
        c05f9f9ca9834fa042ae8fba584b09ff",
        );
    }

    #[test]
    fn aes_cfb_256() {
        check_vector(
            &KEY_256,
            "
        dc7e84bfda79164b7ecd8486985d3860\
        39ffed143b28b1c832113c6331e5407b\
        df10132415e54b92a13ed0a8267ae2f9\
        75a385741ab9cef82031623d55b1e471",
        );
    }

    #[test]
    fn partial_final_block_is_prefix_of_full_encryption() {
        let keys = schedule(&KEY_128);
        let full = cfb_core_enc(&PLAINTEXT, keys.round_keys(), &IV);
        let partial = cfb_core_enc(&PLAINTEXT[..37], keys.round_keys(), &IV);
        assert_eq!(partial.len(), 37);
        assert_eq!(partial[..], full[..37]);
        assert_eq!(
            cfb_core_dec(&partial, keys.round_keys(), &IV),
            PLAINTEXT[..37].to_vec()
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let keys = schedule(&KEY_128);
        assert!(cfb_core_enc(&[], keys.round_keys(), &IV).is_empty());
        assert!(cfb_core_dec(&[], keys.round_keys(), &IV).is_empty());
    }

    #[test]
    fn parallel_decrypt_matches_serial_encrypt() {
        let keys = schedule(&KEY_256);
        let input = long_input(8 * 1024 + 9);
        let encrypted = cfb_core_enc(&input, keys.round_keys(), &IV);
        assert_eq!(cfb_core_dec(&encrypted, keys.round_keys(), &IV), input);
    }
}
