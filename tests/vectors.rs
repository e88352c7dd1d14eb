#![cfg(feature = "test-vectors")]

// all test vectors from
// https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf
// and https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.197-upd1.pdf (appendix C)

use hex_literal::hex;

use aesmodes::{
    Cipher, Error, Result, decrypt, decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb,
    decrypt_ofb, encrypt, encrypt_cbc, encrypt_cfb, encrypt_ctr, encrypt_ecb, encrypt_ofb,
};

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const KEY_192: [u8; 24] = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
const KEY_256: [u8; 32] = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");

const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
const CTR_IV: [u8; 16] = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

#[test]
fn fips197_appendix_c_blocks() -> Result<()> {
    let block = hex!("00112233445566778899aabbccddeeff");
    let cases: [(&[u8], [u8; 16]); 3] = [
        (
            &hex!("000102030405060708090a0b0c0d0e0f"),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
            hex!("8ea2b7ca516745bfeafc49904b496089"),
        ),
    ];

    for (key, expected) in cases {
        let encrypted = encrypt(&block, key)?;
        assert_eq!(encrypted, expected, "encrypted result does not match expected");
        assert_eq!(decrypt(&expected, key)?, block, "decrypted result does not match expected");
    }
    Ok(())
}

#[test]
fn ecb_vectors() -> Result<()> {
    // final block is the PKCS#7 padding block (16 x 0x10)
    let cases: [(&[u8], [u8; 80]); 3] = [
        (
            &KEY_128,
            hex!(
                "3ad77bb40d7a3660a89ecaf32466ef97"
                "f5d3d58503b9699de785895a96fdbaaf"
                "43b1cd7f598ece23881b00e3ed030688"
                "7b0c785e27e8ad3f8223207104725dd4"
                "a254be88e037ddd9d79fb6411c3f9df8"
            ),
        ),
        (
            &KEY_192,
            hex!(
                "bd334f1d6e45f25ff712a214571fa5cc"
                "974104846d0ad3ad7734ecb3ecee4eef"
                "ef7afd2270e2e60adce0ba2face6444e"
                "9a4b41ba738d6c72fb16691603c18e0e"
                "daa0af074bd8083c8a32d4fc563c55cc"
            ),
        ),
        (
            &KEY_256,
            hex!(
                "f3eed1bdb5d2a03c064b5a7e3db181f8"
                "591ccb10d410ed26dc5ba74a31362870"
                "b6ed21b99ca6f4f9f153e7b1beafed1d"
                "23304b7a39f9f3ff067d8d8f9e24ecc7"
                "4c45dfb3b3b484ec35b0512dc8c1c4d6"
            ),
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(encrypt_ecb(&PLAINTEXT, key)?, expected);
        assert_eq!(decrypt_ecb(&expected, key)?, PLAINTEXT);
    }
    Ok(())
}

#[test]
fn cbc_vectors() -> Result<()> {
    let cases: [(&[u8], [u8; 64]); 3] = [
        (
            &KEY_128,
            hex!(
                "7649abac8119b246cee98e9b12e9197d"
                "5086cb9b507219ee95db113a917678b2"
                "73bed6b8e3c1743b7116e69e22229516"
                "3ff1caa1681fac09120eca307586e1a7"
            ),
        ),
        (
            &KEY_192,
            hex!(
                "4f021db243bc633d7178183a9fa071e8"
                "b4d9ada9ad7dedf4e5e738763f69145a"
                "571b242012fb7ae07fa9baac3df102e0"
                "08b0e27988598881d920a9e64f5615cd"
            ),
        ),
        (
            &KEY_256,
            hex!(
                "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
                "9cfc4e967edb808d679f777bc6702c7d"
                "39f23369a9d9bacfa530e26304231461"
                "b2eb05e2c39be9fcda6c19078c6a9d1b"
            ),
        ),
    ];

    for (key, expected) in cases {
        // the published vectors stop before the padding block
        let encrypted = encrypt_cbc(&PLAINTEXT, key, &IV)?;
        assert_eq!(encrypted.len(), 80);
        assert_eq!(encrypted[..64], expected);
        assert_eq!(decrypt_cbc(&encrypted, key, &IV)?, PLAINTEXT);
    }
    Ok(())
}

#[test]
fn cfb_vectors() -> Result<()> {
    let cases: [(&[u8], [u8; 64]); 3] = [
        (
            &KEY_128,
            hex!(
                "3b3fd92eb72dad20333449f8e83cfb4a"
                "c8a64537a0b3a93fcde3cdad9f1ce58b"
                "26751f67a3cbb140b1808cf187a4f4df"
                "c04b05357c5d1c0eeac4c66f9ff7f2e6"
            ),
        ),
        (
            &KEY_192,
            hex!(
                "cdc80d6fddf18cab34c25909c99a4174"
                "67ce7f7f81173621961a2b70171d3d7a"
                "2e1e8a1dd59b88b1c8e60fed1efac4c9"
                "c05f9f9ca9834fa042ae8fba584b09ff"
            ),
        ),
        (
            &KEY_256,
            hex!(
                "dc7e84bfda79164b7ecd8486985d3860"
                "39ffed143b28b1c832113c6331e5407b"
                "df10132415e54b92a13ed0a8267ae2f9"
                "75a385741ab9cef82031623d55b1e471"
            ),
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(encrypt_cfb(&PLAINTEXT, key, &IV)?, expected);
        assert_eq!(decrypt_cfb(&expected, key, &IV)?, PLAINTEXT);
    }
    Ok(())
}

#[test]
fn ofb_vectors() -> Result<()> {
    let cases: [(&[u8], [u8; 64]); 3] = [
        (
            &KEY_128,
            hex!(
                "3b3fd92eb72dad20333449f8e83cfb4a"
                "7789508d16918f03f53c52dac54ed825"
                "9740051e9c5fecf64344f7a82260edcc"
                "304c6528f659c77866a510d9c1d6ae5e"
            ),
        ),
        (
            &KEY_192,
            hex!(
                "cdc80d6fddf18cab34c25909c99a4174"
                "fcc28b8d4c63837c09e81700c1100401"
                "8d9a9aeac0f6596f559c6d4daf59a5f2"
                "6d9f200857ca6c3e9cac524bd9acc92a"
            ),
        ),
        (
            &KEY_256,
            hex!(
                "dc7e84bfda79164b7ecd8486985d3860"
                "4febdc6740d20b3ac88f6ad82a4fb08d"
                "71ab47a086e86eedf39d1c5bba97c408"
                "0126141d67f37be8538f5a8be740e484"
            ),
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(encrypt_ofb(&PLAINTEXT, key, &IV)?, expected);
        assert_eq!(decrypt_ofb(&expected, key, &IV)?, PLAINTEXT);
    }
    Ok(())
}

#[test]
fn ctr_vectors() -> Result<()> {
    let cases: [(&[u8], [u8; 64]); 3] = [
        (
            &KEY_128,
            hex!(
                "874d6191b620e3261bef6864990db6ce"
                "9806f66b7970fdff8617187bb9fffdff"
                "5ae4df3edbd5d35e5b4f09020db03eab"
                "1e031dda2fbe03d1792170a0f3009cee"
            ),
        ),
        (
            &KEY_192,
            hex!(
                "1abc932417521ca24f2b0459fe7e6e0b"
                "090339ec0aa6faefd5ccc2c6f4ce8e94"
                "1e36b26bd1ebc670d1bd1d665620abf7"
                "4f78a7f6d29809585a97daec58c6b050"
            ),
        ),
        (
            &KEY_256,
            hex!(
                "601ec313775789a5b7a7f504bbf3d228"
                "f443e3ca4d62b59aca84e990cacaf5c5"
                "2b0930daa23de94ce87017ba2d84988d"
                "dfc9c58db67aada613c2dd08457941a6"
            ),
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(encrypt_ctr(&PLAINTEXT, key, &CTR_IV)?, expected);
        assert_eq!(decrypt_ctr(&expected, key, &CTR_IV)?, PLAINTEXT);

        // a truncated message is the prefix of the full one
        let partial = encrypt_ctr(&PLAINTEXT[..23], key, &CTR_IV)?;
        assert_eq!(partial[..], expected[..23]);
    }
    Ok(())
}

#[test]
fn cipher_matches_free_functions() -> Result<()> {
    let cipher = Cipher::from_slice(&KEY_192)?;
    assert_eq!(cipher.encrypt_cbc(&PLAINTEXT, &IV)?, encrypt_cbc(&PLAINTEXT, &KEY_192, &IV)?);
    assert_eq!(cipher.encrypt_ctr(&PLAINTEXT, &CTR_IV)?, encrypt_ctr(&PLAINTEXT, &KEY_192, &CTR_IV)?);
    assert_eq!(cipher.encrypt_ecb(&PLAINTEXT)?, encrypt_ecb(&PLAINTEXT, &KEY_192)?);
    Ok(())
}

#[test]
fn wrong_iv_length_is_rejected() {
    assert!(matches!(
        encrypt_cbc(&PLAINTEXT, &KEY_128, &IV[..8]),
        Err(Error::InvalidIv { len: 8 })
    ));
}
