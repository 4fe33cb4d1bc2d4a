/*!
  Binary for the CLI of pymod2pkg
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

use std::fs::read_to_string;

use clap::Parser;
use colored::Colorize;
use pymod2pkg::{RuleTable, Translator};
use pymod2pkg_cli::{cli::CliApp, error::CliError};

fn run(cli: CliApp) -> Result<(), CliError> {
    let translator = Translator::new()?;

    if cli.upstream {
        println!("{}", translator.module_to_upstream(&cli.modulename));
        return Ok(());
    }

    let distribution = cli.distribution();
    let versions = cli.python_versions();
    log::info!("Translating `{}` for `{distribution}`", cli.modulename);

    let resolution = match &cli.rules {
        Some(path) => {
            let content = read_to_string(path).map_err(|error| CliError::RuleFileReading {
                error,
                filename: path.clone(),
            })?;
            let table = RuleTable::from_json(&content)?;
            log::debug!("loaded {} rules from {path:?}", table.len());

            translator.module_to_package_with(&table, &cli.modulename, &distribution, &versions)?
        }
        None => translator.module_to_package(&cli.modulename, &distribution, &versions)?,
    };

    println!("{resolution}");
    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Arguments: {cli:?}");

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
