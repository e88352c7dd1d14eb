use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Mode of operation.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = Mode::Cbc,
    )]
    pub mode: Mode,

    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (raw 16, 24, or 32 bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// IV file path (raw 16 bytes). Required for cbc, cfb, ofb, and ctr.
    #[arg(long = "iv")]
    pub iv: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
        requires = "gen_key"
    )]
    pub key_size: KeySize,

    /// Generate a random IV (written to path specified by iv)
    #[arg(long = "gen-iv", requires = "iv")]
    pub gen_iv: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aesmodes::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aesmodes::KeySize::Bits128,
            KeySize::Bits192 => aesmodes::KeySize::Bits192,
            KeySize::Bits256 => aesmodes::KeySize::Bits256,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    /// Single 16-byte block, no mode of operation.
    #[value(name = "block")]
    Block,
    #[value(name = "ecb")]
    Ecb,
    #[value(name = "cbc")]
    Cbc,
    #[value(name = "cfb")]
    Cfb,
    #[value(name = "ofb")]
    Ofb,
    #[value(name = "ctr")]
    Ctr,
}

impl Mode {
    pub fn needs_iv(self) -> bool {
        !matches!(self, Mode::Block | Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Block => "block",
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        };
        f.write_str(name)
    }
}
