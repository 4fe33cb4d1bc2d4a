//! Translation of python module names into distribution package names.

use crate::{
    error::Error,
    family::DistributionFamily,
    package::{PackagePair, PythonVersion, Resolution},
    rule::RuleTable,
    tables::BuiltinTables,
};

/// Translates module names using one rule table per distribution family.
///
/// The tables are fixed at construction and only read afterwards,
/// so a [Translator] can be shared between threads.
#[derive(Debug, Clone)]
pub struct Translator {
    tables: BuiltinTables,
}

impl Translator {
    /// Create a [Translator] using the built-in rule tables.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_tables(BuiltinTables::load()?))
    }

    /// Create a [Translator] from the given tables.
    pub fn with_tables(tables: BuiltinTables) -> Self {
        Self { tables }
    }

    /// Rule table of the given family
    pub fn table(&self, family: DistributionFamily) -> &RuleTable {
        match family {
            DistributionFamily::Rdo => &self.tables.rdo,
            DistributionFamily::Suse => &self.tables.suse,
            DistributionFamily::Ubuntu => &self.tables.ubuntu,
        }
    }

    /// Both package names of `module` on `distribution`.
    pub fn package_pair(&self, module: &str, distribution: &str) -> PackagePair {
        let family = DistributionFamily::from_distribution(distribution);
        log::debug!("distribution `{distribution}` belongs to family {family}");

        self.package_pair_in(self.table(family), module, distribution)
    }

    /// Like [Translator::package_pair], but consulting `table` instead of the family's table.
    ///
    /// The default transformation is still chosen by the family of `distribution`.
    pub fn package_pair_in(&self, table: &RuleTable, module: &str, distribution: &str) -> PackagePair {
        table
            .evaluate(module, Some(distribution))
            .unwrap_or_else(|| {
                let transform = DistributionFamily::from_distribution(distribution).default_transform();
                log::debug!("no rule matches `{module}`, using {transform:?}");
                transform.apply(module)
            })
    }

    /// Return the package name(s) of `module` on `distribution` for the requested python versions.
    ///
    /// One version yields a single name, several versions yield
    /// the python 2 name before the python 3 name.
    pub fn module_to_package(
        &self,
        module: &str,
        distribution: &str,
        versions: &[PythonVersion],
    ) -> Result<Resolution, Error> {
        self.package_pair(module, distribution).project(versions)
    }

    /// Like [Translator::module_to_package], but consulting `table` instead of the family's table.
    pub fn module_to_package_with(
        &self,
        table: &RuleTable,
        module: &str,
        distribution: &str,
        versions: &[PythonVersion],
    ) -> Result<Resolution, Error> {
        self.package_pair_in(table, module, distribution)
            .project(versions)
    }

    /// Return the OpenStack upstream project name of `module`.
    ///
    /// Modules without an upstream rule keep their name.
    pub fn module_to_upstream(&self, module: &str) -> String {
        match self.tables.upstream.evaluate(module, None) {
            Some(packages) => packages.python2,
            None => module.to_owned(),
        }
    }
}
