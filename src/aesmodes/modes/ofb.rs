use crate::aesmodes::core::encrypt_block;
use crate::aesmodes::modes::util::xor_keystream;

/// Core OFB encryption and decryption algorithm (OFB is symmetric).
/// The keystream is the IV encrypted repeatedly, independent of the data, so it must be
/// generated serially. A partial final block uses only the needed keystream prefix.
///
/// **Important**: reusing a key and IV pair reuses the keystream.
pub fn ofb_core(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    let mut keystream = *iv;

    for (out, chunk) in output.chunks_mut(16).zip(input.chunks(16)) {
        keystream = encrypt_block(&keystream, round_keys);
        xor_keystream(out, chunk, &keystream);
    }

    output
}
