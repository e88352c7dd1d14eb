use super::constants::SBOX;
use super::galois::{MUL_02, MUL_03};
use super::util::{add_round_key, rotate_rows};

/// Core AES encryption function. Encrypts 16 byte block using round keys in forward order.
/// Callers guarantee `round_keys.len() == Nr + 1`.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *plaintext;
    let last_key_idx = round_keys.len() - 1;

    // add first round key to state
    add_round_key(&mut state, &round_keys[0]);

    // perform all rounds except for the last
    for round_key in &round_keys[1..last_key_idx] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last_key_idx]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step. Row `r` rotates left by `r` positions.
/// [
///     01 05 09 13   ---->   01 05 09 13
///     02 06 10 14   ---->   06 10 14 02
///     03 07 11 15   ---->   11 15 03 07
///     04 08 12 16   ---->   16 04 08 12
/// ]
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    rotate_rows(state, 1);
}

/// MixColumns step. Each column is multiplied by a constant matrix over GF(2^8).
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (col[0], col[1], col[2], col[3]);
        col[0] = MUL_02[a as usize] ^ MUL_03[b as usize] ^ c ^ d;
        col[1] = a ^ MUL_02[b as usize] ^ MUL_03[c as usize] ^ d;
        col[2] = a ^ b ^ MUL_02[c as usize] ^ MUL_03[d as usize];
        col[3] = MUL_03[a as usize] ^ b ^ c ^ MUL_02[d as usize];
    }
}
