//! Package names produced by a translation and the python versions selecting them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Python interpreter version a package name is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PythonVersion {
    /// Python 2, selected by the token `py2`
    Py2,
    /// Python 3, selected by the token `py3`
    Py3,
}

impl PythonVersion {
    /// Token used on the command line for this version
    pub fn token(&self) -> &'static str {
        match self {
            PythonVersion::Py2 => "py2",
            PythonVersion::Py3 => "py3",
        }
    }
}

impl FromStr for PythonVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "py2" => Ok(PythonVersion::Py2),
            "py3" => Ok(PythonVersion::Py3),
            _ => Err(Error::UnknownPythonVersion {
                token: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Distribution package names of one module, for python 2 and python 3.
///
/// Either name may be empty if the distribution does not ship
/// a package for that python version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackagePair {
    /// Package name for python 2
    pub python2: String,
    /// Package name for python 3
    pub python3: String,
}

impl PackagePair {
    /// Create a new [PackagePair].
    pub fn new(python2: impl Into<String>, python3: impl Into<String>) -> Self {
        Self {
            python2: python2.into(),
            python3: python3.into(),
        }
    }

    /// Pair that uses the same name for both python versions.
    pub fn same(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            python2: name.clone(),
            python3: name,
        }
    }

    /// Return the package name for the given python version.
    pub fn get(&self, version: PythonVersion) -> &str {
        match version {
            PythonVersion::Py2 => &self.python2,
            PythonVersion::Py3 => &self.python3,
        }
    }

    /// Select the requested names, python 2 before python 3.
    ///
    /// A single requested version yields [Resolution::Single],
    /// anything longer yields [Resolution::Multiple] with every version at most once.
    pub fn project(&self, versions: &[PythonVersion]) -> Result<Resolution, Error> {
        match versions {
            [] => Err(Error::NoPythonVersion),
            [version] => Ok(Resolution::Single(self.get(*version).to_owned())),
            _ => Ok(Resolution::Multiple(
                [PythonVersion::Py2, PythonVersion::Py3]
                    .into_iter()
                    .filter(|version| versions.contains(version))
                    .map(|version| self.get(version).to_owned())
                    .collect(),
            )),
        }
    }
}

/// Result of resolving a module for one or more python versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one python version was requested
    Single(String),
    /// Several python versions were requested
    Multiple(Vec<String>),
}

impl Resolution {
    /// All resolved names in output order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Resolution::Single(name) => vec![name.as_str()],
            Resolution::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Single(name) => f.write_str(name),
            Resolution::Multiple(names) => f.write_str(&names.join(" ")),
        }
    }
}
