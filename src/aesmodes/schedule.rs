//! AES key schedule (FIPS-197 section 5.2).

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesmodes::core::constants::SBOX;
use crate::aesmodes::core::galois::rcon;
use crate::aesmodes::error::{Error, Result};
use crate::aesmodes::key::{Key, KeySize};

/// Round keys derived from a single AES key: 11, 13, or 15 blocks of 16 bytes for
/// AES-128, AES-192, and AES-256. The extra round key is the initial round key, which is
/// not counted in most documentation as it is simply the original key.
///
/// Round keys are stored in forward (encryption) order. [`KeySchedule::reversed`] yields
/// the same round keys in decryption order. The schedule is zeroized on drop, and can be
/// erased early with [`KeySchedule::erase`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: Vec<[u8; 16]>,
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    /// Runs the key schedule on `key`.
    pub fn expand(key: &Key) -> Self {
        let size = key.size();
        let schedule = Self {
            round_keys: expand_key(key.as_bytes(), size),
            size,
        };
        debug!(key_size = %size, rounds = size.nr(), "derived key schedule");
        schedule
    }

    /// Runs the key schedule on raw key bytes. Fails with
    /// [InvalidKeySize](Error::InvalidKeySize) unless the key is 16, 24, or 32 bytes.
    pub fn expand_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::expand(&Key::try_from_slice(key)?))
    }

    /// Wraps pre-derived round keys. Fails with
    /// [InvalidKeySchedule](Error::InvalidKeySchedule) if the count is not `Nr + 1`.
    pub fn from_round_keys(size: KeySize, round_keys: Vec<[u8; 16]>) -> Result<Self> {
        if round_keys.len() != size.round_key_count() {
            return Err(Error::InvalidKeySchedule {
                expected: size.round_key_count(),
                actual: round_keys.len(),
            });
        }
        Ok(Self { round_keys, size })
    }

    /// Getter for round keys. Returned as a slice of 16-byte arrays.
    pub fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    pub fn key_size(&self) -> KeySize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.round_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.round_keys.is_empty()
    }

    /// Same round keys, last round key first. This is the order the inverse cipher consumes.
    pub fn reversed(&self) -> Self {
        let mut round_keys = self.round_keys.clone();
        round_keys.reverse();
        Self {
            round_keys,
            size: self.size,
        }
    }

    /// Checks the round key count still matches the key size.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.round_keys.len() != self.size.round_key_count() {
            return Err(Error::InvalidKeySchedule {
                expected: self.size.round_key_count(),
                actual: self.round_keys.len(),
            });
        }
        Ok(())
    }

    /// Zeroizes and empties the schedule. Best effort, see [secure_erase](crate::secure_erase).
    pub fn erase(&mut self) {
        self.round_keys.zeroize();
    }
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[inline(always)]
fn sub_word(w: [u8; 4]) -> [u8; 4] {
    w.map(|b| SBOX[b as usize])
}

#[inline(always)]
fn rot_word(w: [u8; 4]) -> [u8; 4] {
    [w[1], w[2], w[3], w[0]]
}

fn expand_key(key: &[u8], size: KeySize) -> Vec<[u8; 16]> {
    // Variable names match FIPS-197: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words kept (Nr + 1 round keys), later words are never generated
    let nk = size.nk();
    let nr = size.nr();
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

    // first nk words of w are filled with the initial key
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    let mut temp = w[nk - 1];
    for i in nk..nw {
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon(i / nk);
        } else if nk > 6 && i % nk == 4 {
            // additional substitution on temp for AES-256 only
            temp = sub_word(temp);
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - nk]);
        temp = w[i];
    }

    // words are columns of the column-major round key blocks
    let round_keys = w
        .chunks_exact(4)
        .map(|words| {
            let mut rk = [0u8; 16];
            for (col, word) in words.iter().enumerate() {
                rk[col * 4..col * 4 + 4].copy_from_slice(word);
            }
            rk
        })
        .collect();

    w.zeroize();
    temp.zeroize();
    round_keys
}
