mod cipher;
mod core;
mod error;
mod interface;
mod key;
mod modes;
mod schedule;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use interface::{
    decrypt, decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb, decrypt_ofb, encrypt,
    encrypt_cbc, encrypt_cfb, encrypt_ctr, encrypt_ecb, encrypt_ofb,
};
pub use key::{
    BLOCK_SIZE, Key, KeySize, generate_iv, generate_iv_with, generate_key, generate_key_with,
    secure_erase,
};
pub use modes::util::PARALLEL_THRESHOLD;
pub use schedule::KeySchedule;
