//! Core AES implementation for encryption and decryption of a 16 byte block. Exports encrypt_block and decrypt_block.

pub(crate) mod constants;
mod decryption;
mod encryption;
pub(crate) mod galois;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
