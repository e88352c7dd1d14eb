use super::constants::SBOX_INV;
use super::galois::{MUL_09, MUL_0B, MUL_0D, MUL_0E};
use super::util::{add_round_key, rotate_rows};

/// Core AES decryption function. Decrypts 16 byte block using round keys in decryption
/// order, i.e. the forward schedule reversed so the final round key comes first.
/// Callers guarantee `round_keys.len() == Nr + 1`.
#[inline(always)]
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *ciphertext;
    let last_key_idx = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last_key_idx] {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    // last round skips inverse mixcolumns step
    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[last_key_idx]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows step. Row `r` rotates right by `r` positions.
/// [
///     01 05 09 13   ---->   01 05 09 13
///     06 10 14 02   ---->   02 06 10 14
///     11 15 03 07   ---->   03 07 11 15
///     16 04 08 12   ---->   04 08 12 16
/// ]
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    rotate_rows(state, 3);
}

/// Inverse MixColumns step.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (
            col[0] as usize,
            col[1] as usize,
            col[2] as usize,
            col[3] as usize,
        );
        col[0] = MUL_0E[a] ^ MUL_0B[b] ^ MUL_0D[c] ^ MUL_09[d];
        col[1] = MUL_09[a] ^ MUL_0E[b] ^ MUL_0B[c] ^ MUL_0D[d];
        col[2] = MUL_0D[a] ^ MUL_09[b] ^ MUL_0E[c] ^ MUL_0B[d];
        col[3] = MUL_0B[a] ^ MUL_0D[b] ^ MUL_09[c] ^ MUL_0E[d];
    }
}
