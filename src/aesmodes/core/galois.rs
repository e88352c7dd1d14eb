//! GF(2^8) arithmetic with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
//! MixColumns uses the lookup tables below, built at compile time.

// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) const fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Shift-and-add multiplication, only used to fill the tables.
const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = dbl(a);
        b >>= 1;
    }
    p
}

const fn table(coef: u8) -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = gmul(i as u8, coef);
        i += 1;
    }
    t
}

pub(crate) const MUL_02: [u8; 256] = table(0x02);
pub(crate) const MUL_03: [u8; 256] = table(0x03);
pub(crate) const MUL_09: [u8; 256] = table(0x09);
pub(crate) const MUL_0B: [u8; 256] = table(0x0B);
pub(crate) const MUL_0D: [u8; 256] = table(0x0D);
pub(crate) const MUL_0E: [u8; 256] = table(0x0E);

/// Round constant for key schedule round `i` (1-based): x^(i-1) in GF(2^8).
pub(crate) fn rcon(i: usize) -> u8 {
    let mut r = 0x01;
    for _ in 1..i {
        r = dbl(r);
    }
    r
}
