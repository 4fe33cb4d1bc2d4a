//! Built-in rule tables of the supported distribution families.

use crate::{
    error::Error,
    rule::{Rule, RuleTable},
    transform::Transform,
};

/// The four built-in tables
#[derive(Debug, Clone)]
pub struct BuiltinTables {
    /// Fedora, CentOS, RHEL and everything not matched by another family
    pub rdo: RuleTable,
    /// openSUSE and SLES
    pub suse: RuleTable,
    /// Ubuntu
    pub ubuntu: RuleTable,
    /// OpenStack upstream project names
    pub upstream: RuleTable,
}

impl BuiltinTables {
    /// Compile all built-in tables.
    pub fn load() -> Result<Self, Error> {
        Ok(Self {
            rdo: rdo()?,
            suse: suse(),
            ubuntu: ubuntu(),
            upstream: upstream(),
        })
    }
}

fn clients(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("python-{name}client"))
        .collect()
}

fn single(module: &str, package: &str) -> Rule {
    Rule::single(module, package, None)
}

fn pair(module: &str, package: &str, python3: &str) -> Rule {
    Rule::single(module, package, Some(python3))
}

/// Rules for Fedora/RDO style distributions.
pub fn rdo() -> Result<RuleTable, Error> {
    Ok(RuleTable::new(vec![
        pair("Babel", "python-babel", "python3-babel"),
        single("bandit", "bandit"),
        pair("distribute", "python-setuptools", "python3-setuptools"),
        pair("dnspython", "python-dns", "python3-dns"),
        pair(
            "google-api-python-client",
            "python-google-api-client",
            "python3-google-api-client",
        ),
        pair("GitPython", "GitPython", "python3-GitPython"),
        pair("pyOpenSSL", "pyOpenSSL", "python3-pyOpenSSL"),
        pair("IPy", "python-IPy", "python-IPy-python3"),
        pair("pycrypto", "python-crypto", "python3-crypto"),
        pair("pyzmq", "python-zmq", "python3-zmq"),
        pair("mysql-python", "MySQL-python", "python3-mysql"),
        pair("PyMySQL", "python-PyMySQL", "python3-PyMySQL"),
        pair("PyJWT", "python-jwt", "python3-jwt"),
        pair("MySQL-python", "MySQL-python", "python3-mysql"),
        pair("PasteDeploy", "python-paste-deploy", "python3-paste-deploy"),
        pair("sqlalchemy-migrate", "python-migrate", "python3-migrate"),
        single("qpid-python", "python-qpid"),
        pair("nosexcover", "python-nose-xcover", "python3-nose-xcover."),
        pair("posix_ipc", "python-posix_ipc", "python3-posix_ipc"),
        pair("oslosphinx", "python-oslo-sphinx", "python3-oslo-sphinx"),
        pair("ovs", "python-openvswitch", "python3-openvswitch"),
        pair("pyinotify", "python-inotify", "python3-inotify"),
        pair("pyScss", "python-scss", "python3-scss"),
        single("tripleo-incubator", "openstack-tripleo"),
        pair("pika-pool", "python-pika_pool", "python3-pika_pool"),
        pair("suds-jurko", "python-suds", "python3-suds"),
        pair("supervisor", "supervisor", "python3-supervisor"),
        pair(
            "wsgi_intercept",
            "python-wsgi_intercept",
            "python3-wsgi_intercept",
        ),
        pair("Sphinx", "python-sphinx", "python3-sphinx"),
        pair("xattr", "pyxattr", "python3-pyxattr"),
        pair(
            "XStatic-term.js",
            "python-XStatic-termjs",
            "python3-XStatic-termjs",
        ),
        single("horizon", "openstack-dashboard"),
        single("networking-vsphere", "openstack-neutron-vsphere"),
        single("m2crypto", "m2crypto"),
        pair("libvirt-python", "libvirt-python", "libvirt-python3"),
        single("tempest-horizon", "python-horizon-tests-tempest"),
        Rule::multi(
            &[
                "PyYAML",
                "numpy",
                "pyflakes",
                "pylint",
                "pyparsing",
                "pystache",
                "pytz",
                "pysendfile",
            ],
            Transform::SameNamePython3Prefix,
        ),
        // OpenStack services
        Rule::multi(
            &[
                "aodh",
                "barbican",
                "ceilometer",
                "cinder",
                "cloudkitty",
                "designate",
                "ec2-api",
                "glance",
                "heat",
                "heat-templates",
                "ironic",
                "ironic-discoverd",
                "ironic-inspector",
                "ironic-python-agent",
                "karbor",
                "keystone",
                "magnum",
                "manila",
                "masakari",
                "masakari-monitors",
                "mistral",
                "monasca-agent",
                "monasca-api",
                "monasca-ceilometer",
                "monasca-log-api",
                "monasca-notification",
                "monasca-persister",
                "monasca-transform",
                "murano",
                "neutron",
                "neutron-fwaas",
                "neutron-lbaas",
                "neutron-vpnaas",
                "nova",
                "octavia",
                "rally",
                "sahara",
                "swift",
                "Tempest",
                "trove",
                "tuskar",
                "vitrage",
                "zaqar",
            ],
            Transform::OpenstackPrefix,
        ),
        // Horizon plugins, normalized to openstack-<project>-ui
        Rule::regex(r"\w+-(dashboard|ui)", Transform::RdoHorizonPlugin)?,
        // XStatic projects keep the pypi name, no lowercasing
        Rule::regex(r"^XStatic.*", Transform::RdoXstatic)?,
        // Tempest plugins, normalized to python-<project>-tests-tempest
        Rule::regex(r"\w+-tempest-plugin", Transform::RdoTempestPlugin)?,
    ]))
}

/// Rules for openSUSE and SLES.
pub fn suse() -> RuleTable {
    RuleTable::new(vec![
        // not following the SUSE naming policy
        Rule::multi(
            &["ansible", "libvirt-python", "python-ldap"],
            Transform::SameNamePython3Prefix,
        ),
        // OpenStack services
        Rule::multi(
            &[
                "ceilometer",
                "cinder",
                "designate",
                "glance",
                "heat",
                "ironic",
                "karbor",
                "keystone",
                "manila",
                "masakari",
                "masakari-monitors",
                "mistral",
                "monasca-agent",
                "monasca-api",
                "monasca-ceilometer",
                "monasca-log-api",
                "monasca-notification",
                "monasca-persister",
                "monasca-transform",
                "neutron",
                "nova",
                "rally",
                "sahara",
                "swift",
                "Tempest",
                "trove",
                "tuskar",
                "zaqar",
            ],
            Transform::OpenstackPrefix,
        ),
        // OpenStack clients
        Rule::multi(
            &clients(&[
                "barbican",
                "ceilometer",
                "cinder",
                "cloudkitty",
                "congress",
                "cue",
                "designate",
                "distil",
                "drac",
                "fuel",
                "freezer",
                "heat",
                "glance",
                "glare",
                "ironic",
                "ironic-inspector-",
                "karbor",
                "k8s",
                "keystone",
                "magnum",
                "manila",
                "masakari",
                "mistral",
                "monasca",
                "murano",
                "nimble",
                "neutron",
                "nova",
                "oneview",
                "openstack",
                "sahara",
                "scci",
                "searchlight",
                "senlin",
                "smaug",
                "solum",
                "swift",
                "tacker",
                "tripleo",
                "trove",
                "vitrage",
                "watcher",
                "zaqar",
            ]),
            Transform::SubstPython2Python3,
        ),
        pair("devel", "python-devel", "python3-devel"),
        // ui components
        single("horizon", "openstack-dashboard"),
        single("designate-dashboard", "openstack-horizon-plugin-designate-ui"),
        single("group-based-policy-ui", "openstack-horizon-plugin-gbp-ui"),
        single("ironic-ui", "openstack-horizon-plugin-ironic-ui"),
        single("magnum-ui", "openstack-horizon-plugin-magnum-ui"),
        single("manila-ui", "openstack-horizon-plugin-manila-ui"),
        single("monasca-ui", "openstack-horizon-plugin-monasca-ui"),
        single("murano-dashboard", "openstack-horizon-plugin-murano-ui"),
        single(
            "neutron-fwaas-dashboard",
            "openstack-horizon-plugin-neutron-fwaas-ui",
        ),
        single(
            "neutron-lbaas-dashboard",
            "openstack-horizon-plugin-neutron-lbaas-ui",
        ),
        single(
            "neutron-vpnaas-dashboard",
            "openstack-horizon-plugin-neutron-vpnaas-ui",
        ),
        single("sahara-dashboard", "openstack-horizon-plugin-sahara-ui"),
        single("trove-dashboard", "openstack-horizon-plugin-trove-ui"),
        single("networking-vsphere", "openstack-neutron-vsphere"),
    ])
}

/// Rules for Ubuntu.
pub fn ubuntu() -> RuleTable {
    RuleTable::new(vec![
        single("django_openstack_auth", "python-openstack-auth"),
        single("glance_store", "python-glance-store"),
        single("GitPython", "python-git"),
        single("libvirt-python", "python-libvirt"),
        single("PyMySQL", "python-mysql"),
        single("pyOpenSSL", "python-openssl"),
        single("PyYAML", "python-yaml"),
        single("sqlalchemy-migrate", "python-migrate"),
        single("suds-jurko", "python-suds"),
        // OpenStack clients
        Rule::multi(
            &clients(&[
                "barbican",
                "ceilometer",
                "cinder",
                "cloudkitty",
                "congress",
                "designate",
                "fuel",
                "heat",
                "glance",
                "ironic",
                "karbor",
                "keystone",
                "magnum",
                "manila",
                "masakari",
                "mistral",
                "monasca",
                "murano",
                "neutron",
                "nova",
                "openstack",
                "sahara",
                "senlin",
                "swift",
                "trove",
                "zaqar",
            ]),
            Transform::SameNamePythonSubstPython3,
        ),
    ])
}

/// Rules mapping modules to OpenStack upstream project names.
///
/// Only the python 2 name of a match is used.
pub fn upstream() -> RuleTable {
    RuleTable::new(vec![
        single("openstacksdk", "python-openstacksdk"),
        single("gnocchiclient", "python-gnocchiclient"),
        single("aodhclient", "python-aodhclient"),
        single("keystoneauth1", "keystoneauth"),
        single("microversion_parse", "microversion-parse"),
        single("XStatic-smart-table", "xstatic-angular-smart-table"),
    ])
}
