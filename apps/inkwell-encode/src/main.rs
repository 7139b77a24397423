#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;

use inkwell_credentials::EncoderRegistry;
use inkwell_platform::LoggingConfig;

mod cli;

fn main() -> anyhow::Result<ExitCode> {
    // stdout carries only the encoded value; diagnostics stay quiet unless RUST_LOG asks
    inkwell_platform::logging::init(&LoggingConfig {
        level: "warn".to_owned(),
        ..LoggingConfig::default()
    })?;

    let registry = EncoderRegistry::with_builtin();
    let outcome = cli::run(std::env::args_os(), &registry);

    println!("{}", outcome.message());
    Ok(outcome.exit_code())
}
