mod cli;

use std::process::ExitCode;

use clap::Parser;
use inchi_core::{InchiFlag, OptionPrefix, Options, OptionsBuilder};
use inchi_domain::InchiStatus;
use inchi_engine::InchiEngine;
use inchi_rust::{read_request, AppConfig, InchiError};
use serde::Serialize;

use crate::cli::{Cli, Command, ConvertArgs, FlagArgs, OptionArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Flags => {
            print_flags();
            Ok(ExitCode::SUCCESS)
        }
        Command::Options(args) => print_options(args),
        Command::Convert(args) => convert(args),
    };
    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[inchi-cli] {e}");
            ExitCode::from(2)
        }
    }
}

fn print_flags() {
    println!("{:<22} {:<14} {:<8} {:<24} DESCRIPTION", "NAME", "TOKEN", "ARG", "GROUP");
    for flag in InchiFlag::ALL {
        let arg = format!("{:?}", flag.arity()).to_lowercase();
        let group = flag.group().map(|g| g.to_string()).unwrap_or_default();
        println!("{:<22} {:<14} {:<8} {:<24} {}", flag.name(), flag.token(), arg, group, flag.description());
    }
}

fn build_options(config: &AppConfig, args: &FlagArgs) -> Result<Options, InchiError> {
    let mut builder = if args.no_defaults { OptionsBuilder::new() } else { config.options_builder() };
    for spec in &args.flags {
        builder.with_spec(spec)?;
    }
    Ok(builder.build())
}

fn print_options(args: OptionArgs) -> Result<ExitCode, InchiError> {
    let config = AppConfig::from_env()?;
    let options = build_options(&config, &args.flags)?;
    let prefix = args.prefix.map(OptionPrefix::from).unwrap_or_else(OptionPrefix::platform);
    println!("{}", inchi_core::serialize_with(&options, prefix));
    println!("fingerprint: {}", options.fingerprint());
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ConvertReport<'a> {
    request_hash: String,
    options: String,
    result: &'a inchi_domain::InchiResult,
}

fn convert(args: ConvertArgs) -> Result<ExitCode, InchiError> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = args.library {
        config.library_path = path;
    }
    let options = build_options(&config, &args.flags)?;
    let request = read_request(&args.input)?;
    let engine: InchiEngine<_> = config.load_engine()?;
    let result = engine.to_inchi(&request, &options)?;

    let report = ConvertReport { request_hash: request.content_hash()?,
                                 options: options.to_option_string(),
                                 result: &result };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(match result.status() {
        InchiStatus::Success | InchiStatus::Warning => ExitCode::SUCCESS,
        InchiStatus::Error => ExitCode::from(1),
    })
}
