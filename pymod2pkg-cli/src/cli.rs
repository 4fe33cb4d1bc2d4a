//! Contains structures and functionality for the binary
use std::path::PathBuf;

use clap::ArgAction;
use pymod2pkg::{os_release::host_distribution, PythonVersion};

/// Environment variable holding a log filter
const LOG_ENV: &str = "PYMOD2PKG_LOG";
/// Environment variable holding the distribution used when `--dist` is absent
pub const DIST_ENV: &str = "PYMOD2PKG_DIST";

/// Python versions selectable on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyVersion {
    /// Python 2
    Py2,
    /// Python 3
    Py3,
}

impl From<PyVersion> for PythonVersion {
    fn from(val: PyVersion) -> Self {
        match val {
            PyVersion::Py2 => PythonVersion::Py2,
            PyVersion::Py3 => PythonVersion::Py3,
        }
    }
}

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `PYMOD2PKG_LOG` environment variable value
    ///  * `Warn` otherwise
    pub fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env(LOG_ENV);
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Python module name to package name
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct CliApp {
    /// Python module name
    #[arg(value_name = "MODULENAME")]
    pub modulename: String,
    /// Distribution style (default is $PYMOD2PKG_DIST, then the distribution of this host)
    #[arg(long, conflicts_with = "upstream")]
    pub dist: Option<String>,
    /// Map to the OpenStack project name
    #[arg(long)]
    pub upstream: bool,
    /// Python versions to return (default is py2)
    #[arg(long = "pyver", value_enum, action = ArgAction::Append)]
    pub pyver: Vec<PyVersion>,
    /// JSON rule table used instead of the built-in rules of the distribution
    #[arg(long = "rules", value_parser, conflicts_with = "upstream")]
    pub rules: Option<PathBuf>,
    /// Arguments related to logging
    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl CliApp {
    /// Distribution to translate for: `--dist`, then `$PYMOD2PKG_DIST`, then the host distribution
    pub fn distribution(&self) -> String {
        self.dist
            .clone()
            .or_else(|| std::env::var(DIST_ENV).ok())
            .unwrap_or_else(host_distribution)
    }

    /// Requested python versions, `py2` if none were given
    pub fn python_versions(&self) -> Vec<PythonVersion> {
        if self.pyver.is_empty() {
            vec![PythonVersion::Py2]
        } else {
            self.pyver.iter().copied().map(PythonVersion::from).collect()
        }
    }
}
