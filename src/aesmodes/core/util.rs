// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Position of (row, col) in the column-major 4x4 state.
#[inline(always)]
pub(crate) const fn idx(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// Rotates every row `r` of the state left by `r * dir` columns (`dir` is 1 or 3).
/// Rotating right by `r` is rotating left by `3r` mod 4.
#[inline(always)]
pub(crate) fn rotate_rows(state: &mut [u8; 16], dir: usize) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[idx(row, col)] = s[idx(row, (col + row * dir) & 3)];
        }
    }
}
