//! Translation rules and ordered tables of them.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::Error, package::PackagePair, transform::Transform};

/// Compile a regular expression that only matches at the start of the input.
fn anchored(pattern: &str) -> Result<Regex, Error> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|error| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        error,
    })
}

/// Replacement names of a [Rule::Single] for distributions matching `pattern`
#[derive(Debug, Clone)]
pub struct DistributionOverride {
    source: String,
    pattern: Regex,
    packages: PackagePair,
}

impl DistributionOverride {
    /// Create a new [DistributionOverride].
    pub fn new(pattern: &str, packages: PackagePair) -> Result<Self, Error> {
        Ok(Self {
            source: pattern.to_owned(),
            pattern: anchored(pattern)?,
            packages,
        })
    }

    /// The distribution pattern as written
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Whether this override applies to the given distribution
    pub fn applies_to(&self, distribution: &str) -> bool {
        self.pattern.is_match(distribution)
    }
}

/// A rule translating some module names into a [PackagePair]
#[derive(Debug, Clone)]
pub enum Rule {
    /// Matches exactly one module name
    Single {
        /// The module name
        module: String,
        /// Its packages
        packages: PackagePair,
        /// Checked in order before falling back to `packages`
        overrides: Vec<DistributionOverride>,
    },
    /// Matches any module of a set
    Multi {
        /// The module names
        modules: BTreeSet<String>,
        /// Transformation applied to a matching module
        transform: Transform,
    },
    /// Matches modules starting with a regular expression match
    Regex {
        /// The pattern as written
        source: String,
        /// The compiled, start-anchored pattern
        pattern: Regex,
        /// Transformation applied to a matching module
        transform: Transform,
    },
}

impl Rule {
    /// Rule for one module. Without `python3` the python 3 package equals `package`.
    pub fn single(module: &str, package: &str, python3: Option<&str>) -> Self {
        Rule::Single {
            module: module.to_owned(),
            packages: PackagePair::new(package, python3.unwrap_or(package)),
            overrides: Vec::new(),
        }
    }

    /// Rule applying `transform` to every module in `modules`.
    pub fn multi<S: AsRef<str>>(modules: &[S], transform: Transform) -> Self {
        Rule::Multi {
            modules: modules.iter().map(|m| m.as_ref().to_owned()).collect(),
            transform,
        }
    }

    /// Rule applying `transform` to modules matching `pattern` from their start.
    pub fn regex(pattern: &str, transform: Transform) -> Result<Self, Error> {
        Ok(Rule::Regex {
            source: pattern.to_owned(),
            pattern: anchored(pattern)?,
            transform,
        })
    }

    /// Add a distribution specific override.
    ///
    /// Only [Rule::Single] carries overrides.
    pub fn with_override(mut self, distribution: &str, packages: PackagePair) -> Result<Self, Error> {
        let Rule::Single { overrides, .. } = &mut self else {
            return Err(Error::OverrideOnNonSingleRule {
                distribution: distribution.to_owned(),
            });
        };
        overrides.push(DistributionOverride::new(distribution, packages)?);
        Ok(self)
    }

    /// Translate `module` if this rule matches it.
    ///
    /// Overrides are only consulted for a non-empty `distribution`.
    pub fn evaluate(&self, module: &str, distribution: Option<&str>) -> Option<PackagePair> {
        match self {
            Rule::Single {
                module: name,
                packages,
                overrides,
            } => {
                if module != name {
                    return None;
                }

                let overridden = distribution
                    .filter(|distribution| !distribution.is_empty())
                    .and_then(|distribution| {
                        overrides
                            .iter()
                            .find(|o| o.applies_to(distribution))
                            .map(|o| o.packages.clone())
                    });
                Some(overridden.unwrap_or_else(|| packages.clone()))
            }
            Rule::Multi { modules, transform } => modules
                .contains(module)
                .then(|| transform.apply(module)),
            Rule::Regex {
                pattern, transform, ..
            } => pattern.is_match(module).then(|| transform.apply(module)),
        }
    }
}

/// Serializable description of a [Rule]
#[allow(variant_size_differences)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleSpec {
    /// See [Rule::Single]
    Single {
        /// Module name
        module: String,
        /// Package name, also used for python 3 unless `python3_package` is given
        package: String,
        /// Python 3 package name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        python3_package: Option<String>,
        /// Distribution specific overrides
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        overrides: Vec<OverrideSpec>,
    },
    /// See [Rule::Multi]
    Multi {
        /// Module names
        modules: Vec<String>,
        /// Applied transformation
        transform: Transform,
    },
    /// See [Rule::Regex]
    Regex {
        /// Pattern matched against the start of the module name
        pattern: String,
        /// Applied transformation
        transform: Transform,
    },
}

/// Serializable description of a [DistributionOverride]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSpec {
    /// Pattern matched against the start of the distribution name
    pub distribution: String,
    /// Python 2 package name
    pub python2: String,
    /// Python 3 package name
    pub python3: String,
}

impl TryFrom<RuleSpec> for Rule {
    type Error = Error;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        match spec {
            RuleSpec::Single {
                module,
                package,
                python3_package,
                overrides,
            } => overrides.into_iter().try_fold(
                Rule::single(&module, &package, python3_package.as_deref()),
                |rule, o| rule.with_override(&o.distribution, PackagePair::new(o.python2, o.python3)),
            ),
            RuleSpec::Multi { modules, transform } => Ok(Rule::multi(&modules[..], transform)),
            RuleSpec::Regex { pattern, transform } => Rule::regex(&pattern, transform),
        }
    }
}

/// Ordered list of rules; the first matching rule wins
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create a new [RuleTable].
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Build a table from rule descriptions.
    pub fn from_specs(specs: Vec<RuleSpec>) -> Result<Self, Error> {
        Ok(Self::new(
            specs
                .into_iter()
                .map(Rule::try_from)
                .collect::<Result<_, _>>()?,
        ))
    }

    /// Parse a JSON list of rule descriptions.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Self::from_specs(specs)
    }

    /// The rules in order of precedence
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Result of the first rule matching `module`.
    pub fn evaluate(&self, module: &str, distribution: Option<&str>) -> Option<PackagePair> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            let packages = rule.evaluate(module, distribution)?;
            log::trace!("`{module}` matched rule #{index}: {rule:?}");
            Some(packages)
        })
    }
}
