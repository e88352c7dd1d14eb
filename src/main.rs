mod args;

use args::{Cli, Commands, CommonArgs, Mode};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use aesmodes::Cipher;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--mode {0} requires an IV file (--iv)")]
    MissingIv(Mode),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aesmodes::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match aes_cli(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn aes_cli(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encrypt(enc) => {
            let common = enc.common;

            // read plaintext from input path
            let plaintext = fs::read(&common.input)?;

            // read or generate key
            let mut key = if enc.gen_key {
                let rand_key = aesmodes::generate_key(enc.key_size.into())?;
                fs::write(&common.key, &rand_key)?;
                info!(path = %common.key.display(), "wrote generated key");
                rand_key
            } else {
                fs::read(&common.key)?
            };

            // read or generate IV
            let iv = match (&common.iv, enc.gen_iv) {
                (Some(path), true) => {
                    let iv = aesmodes::generate_iv()?;
                    fs::write(path, iv)?;
                    println!("IV = {}", hex::encode(iv));
                    Some(iv.to_vec())
                }
                (Some(path), false) => Some(fs::read(path)?),
                (None, _) => None,
            };

            let cipher = Cipher::from_slice(&key)?;
            aesmodes::secure_erase(&mut key);

            let start = Instant::now();
            let ciphertext = run(&cipher, &common, iv.as_deref(), Direction::Encrypt, &plaintext)?;
            let duration = start.elapsed();

            fs::write(&common.output, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            // read inputs
            let ciphertext = fs::read(&common.input)?;
            let mut key = fs::read(&common.key)?;
            let iv = common.iv.as_deref().map(fs::read).transpose()?;

            let cipher = Cipher::from_slice(&key)?;
            aesmodes::secure_erase(&mut key);

            let start = Instant::now();
            let plaintext = run(&cipher, &common, iv.as_deref(), Direction::Decrypt, &ciphertext)?;
            let duration = start.elapsed();

            fs::write(&common.output, &plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run(
    cipher: &Cipher,
    common: &CommonArgs,
    iv: Option<&[u8]>,
    direction: Direction,
    input: &[u8],
) -> Result<Vec<u8>, CliError> {
    let mode = common.mode;
    debug!(%mode, ?direction, input = %common.input.display(), "running");

    let iv: &[u8] = match (mode.needs_iv(), iv) {
        (true, Some(iv)) => iv,
        (true, None) => return Err(CliError::MissingIv(mode)),
        (false, _) => &[],
    };

    let output = match (mode, direction) {
        (Mode::Block, Direction::Encrypt) => cipher.encrypt_block(input)?.to_vec(),
        (Mode::Block, Direction::Decrypt) => cipher.decrypt_block(input)?.to_vec(),
        (Mode::Ecb, Direction::Encrypt) => cipher.encrypt_ecb(input)?,
        (Mode::Ecb, Direction::Decrypt) => cipher.decrypt_ecb(input)?,
        (Mode::Cbc, Direction::Encrypt) => cipher.encrypt_cbc(input, iv)?,
        (Mode::Cbc, Direction::Decrypt) => cipher.decrypt_cbc(input, iv)?,
        (Mode::Cfb, Direction::Encrypt) => cipher.encrypt_cfb(input, iv)?,
        (Mode::Cfb, Direction::Decrypt) => cipher.decrypt_cfb(input, iv)?,
        (Mode::Ofb, Direction::Encrypt) => cipher.encrypt_ofb(input, iv)?,
        (Mode::Ofb, Direction::Decrypt) => cipher.decrypt_ofb(input, iv)?,
        (Mode::Ctr, Direction::Encrypt) => cipher.encrypt_ctr(input, iv)?,
        (Mode::Ctr, Direction::Decrypt) => cipher.decrypt_ctr(input, iv)?,
    };
    Ok(output)
}
