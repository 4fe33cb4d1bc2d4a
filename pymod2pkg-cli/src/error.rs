//! This module defines all the errors that can occur while executing pymod2pkg-cli.

use std::path::PathBuf;

use thiserror::Error;

/// Error that occur during execution of the CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Error while reading a rule table file
    #[error("unable to read rule file `{filename}`: {error}")]
    RuleFileReading {
        /// Underlying IO error
        error: std::io::Error,
        /// Path of the rule file
        filename: PathBuf,
    },
    /// Error originating from pymod2pkg
    #[error(transparent)]
    Translation(#[from] pymod2pkg::error::Error),
}
