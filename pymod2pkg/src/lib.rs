//! Translation of python module names into distribution package names

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

pub mod error;
pub mod family;
pub mod os_release;
pub mod package;
pub mod rule;
pub mod tables;
pub mod transform;
pub mod translate;

pub use family::DistributionFamily;
pub use package::{PackagePair, PythonVersion, Resolution};
pub use rule::{Rule, RuleTable};
pub use translate::Translator;
