use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use inchi_core::OptionPrefix;

#[derive(Parser)]
#[command(name = "inchi-cli", about = "InChI generation through the native library", version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every recognized option flag
    Flags,

    /// Render an option string and its fingerprint
    Options(OptionArgs),

    /// Convert a JSON molecule to InChI
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct FlagArgs {
    /// Flag by name or native token; valued flags as NAME=VALUE (repeatable)
    #[arg(short = 'f', long = "flag", value_name = "FLAG", action = clap::ArgAction::Append)]
    pub flags: Vec<String>,

    /// Ignore INCHI_DEFAULT_FLAGS / INCHI_TIMEOUT_SECS from the environment
    #[arg(long)]
    pub no_defaults: bool,
}

#[derive(Args)]
pub struct OptionArgs {
    #[command(flatten)]
    pub flags: FlagArgs,

    /// Option prefix (platform default if omitted)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<Prefix>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Molecule request as JSON
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub flags: FlagArgs,

    /// Shared library path (overrides INCHI_LIBRARY_PATH)
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Prefix {
    Dash,
    Slash,
}

impl From<Prefix> for OptionPrefix {
    fn from(prefix: Prefix) -> Self {
        match prefix {
            Prefix::Dash => OptionPrefix::Dash,
            Prefix::Slash => OptionPrefix::Slash,
        }
    }
}
