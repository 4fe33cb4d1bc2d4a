//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// A rule or override carries a regular expression that does not compile
    #[error("invalid regular expression `{pattern}`: {error}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Error reported by the regex compiler
        #[source]
        error: regex::Error,
    },
    /// A distribution override was added to a rule that is not a single-module rule
    #[error("distribution override `{distribution}` requires a single-module rule")]
    OverrideOnNonSingleRule {
        /// Distribution pattern of the rejected override
        distribution: String,
    },
    /// A python version token other than `py2` or `py3`
    #[error("unknown python version `{token}` (expected `py2` or `py3`)")]
    UnknownPythonVersion {
        /// The token that was given
        token: String,
    },
    /// A translation was requested without any python version
    #[error("at least one python version has to be requested")]
    NoPythonVersion,
    /// A rule table file could not be deserialized
    #[error(transparent)]
    RuleFormat(#[from] serde_json::Error),
}
