//! Name transformations applied to modules when a rule matches
//! or when no rule of a table matches.

use serde::{Deserialize, Serialize};

use crate::package::PackagePair;

/// The transformations a rule (or a distribution family default) can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// See [default_rdo]
    DefaultRdo,
    /// See [default_ubuntu]
    DefaultUbuntu,
    /// See [default_suse]
    DefaultSuse,
    /// See [openstack_prefix]
    OpenstackPrefix,
    /// See [rdo_horizon_plugin]
    RdoHorizonPlugin,
    /// See [rdo_xstatic]
    RdoXstatic,
    /// See [rdo_tempest_plugin]
    RdoTempestPlugin,
    /// See [same_name_python3_prefix]
    SameNamePython3Prefix,
    /// See [same_name_python_subst_python3]
    SameNamePythonSubstPython3,
    /// See [subst_python2_python3]
    SubstPython2Python3,
}

impl Transform {
    /// Apply this transformation to a module name.
    pub fn apply(&self, module: &str) -> PackagePair {
        match self {
            Transform::DefaultRdo => default_rdo(module),
            Transform::DefaultUbuntu => default_ubuntu(module),
            Transform::DefaultSuse => default_suse(module),
            Transform::OpenstackPrefix => openstack_prefix(module),
            Transform::RdoHorizonPlugin => rdo_horizon_plugin(module),
            Transform::RdoXstatic => rdo_xstatic(module),
            Transform::RdoTempestPlugin => rdo_tempest_plugin(module),
            Transform::SameNamePython3Prefix => same_name_python3_prefix(module),
            Transform::SameNamePythonSubstPython3 => same_name_python_subst_python3(module),
            Transform::SubstPython2Python3 => subst_python2_python3(module),
        }
    }
}

fn dashes(module: &str) -> String {
    module.replace(['_', '.'], "-")
}

/// Fedora/RDO naming: everything from the first `-python` is dropped,
/// `_` and `.` become `-`, the name is lowercased and gets a `python-` prefix.
/// The python 3 name substitutes every `python` by `python3`.
pub fn default_rdo(module: &str) -> PackagePair {
    let stem = module.split("-python").next().unwrap_or(module);
    let mut package = dashes(stem).to_lowercase();
    if !package.starts_with("python-") {
        package.insert_str(0, "python-");
    }
    let python3 = package.replace("python", "python3");

    PackagePair::new(package, python3)
}

/// Ubuntu naming: lowercase module with `python-`/`python3-` prefix.
pub fn default_ubuntu(module: &str) -> PackagePair {
    let lower = module.to_lowercase();
    PackagePair::new(format!("python-{lower}"), format!("python3-{lower}"))
}

/// SUSE naming: unmodified module with `python2-`/`python3-` prefix.
pub fn default_suse(module: &str) -> PackagePair {
    PackagePair::new(format!("python2-{module}"), format!("python3-{module}"))
}

/// OpenStack services are packaged as `openstack-<service>` without a python 3 name.
pub fn openstack_prefix(module: &str) -> PackagePair {
    PackagePair::new(format!("openstack-{}", module.to_lowercase()), "")
}

/// Horizon plugins are normalized to `openstack-<project>-ui`.
pub fn rdo_horizon_plugin(module: &str) -> PackagePair {
    PackagePair::new(format!("openstack-{}", module.replace("dashboard", "ui")), "")
}

/// XStatic projects keep their case.
pub fn rdo_xstatic(module: &str) -> PackagePair {
    let name = dashes(module);
    PackagePair::new(format!("python-{name}"), format!("python3-{name}"))
}

/// Tempest plugins are normalized to `python-<project>-tests-tempest`.
pub fn rdo_tempest_plugin(module: &str) -> PackagePair {
    let name = module.replace("tempest-plugin", "tests-tempest");
    PackagePair::new(format!("python-{name}"), format!("python3-{name}"))
}

/// Keep the module name for python 2, prefix `python3-` for python 3.
pub fn same_name_python3_prefix(module: &str) -> PackagePair {
    PackagePair::new(module, format!("python3-{module}"))
}

/// Keep the module name for python 2, substitute `python3` for `python` for python 3.
pub fn same_name_python_subst_python3(module: &str) -> PackagePair {
    PackagePair::new(module, module.replace("python", "python3"))
}

/// Substitute `python2` and `python3` for `python`.
pub fn subst_python2_python3(module: &str) -> PackagePair {
    PackagePair::new(
        module.replace("python", "python2"),
        module.replace("python", "python3"),
    )
}
