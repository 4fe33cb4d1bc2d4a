use pymod2pkg::{
    tables, DistributionFamily, PackagePair, PythonVersion, Resolution, Rule, RuleTable, Translator,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use test_log::test;

const DISTRIBUTIONS: [&str; 4] = ["CentOS Linux", "openSUSE Leap", "Ubuntu", ""];

fn translator() -> Translator {
    Translator::new().expect("built-in tables compile")
}

#[quickcheck]
fn unmatched_modules_use_family_default(module: String, distribution: usize) -> TestResult {
    let translator = translator();
    let distribution = DISTRIBUTIONS[distribution % DISTRIBUTIONS.len()];
    let family = DistributionFamily::from_distribution(distribution);

    if translator
        .table(family)
        .evaluate(&module, Some(distribution))
        .is_some()
    {
        return TestResult::discard();
    }

    TestResult::from_bool(
        translator.package_pair(&module, distribution) == family.default_transform().apply(&module),
    )
}

#[quickcheck]
fn translation_is_deterministic(module: String, distribution: String) -> bool {
    let translator = translator();
    let versions = [PythonVersion::Py2, PythonVersion::Py3];

    translator
        .module_to_package(&module, &distribution, &versions)
        .unwrap()
        == translator
            .module_to_package(&module, &distribution, &versions)
            .unwrap()
}

#[quickcheck]
fn upstream_falls_back_to_identity(module: String) -> TestResult {
    if tables::upstream().evaluate(&module, None).is_some() {
        return TestResult::discard();
    }
    TestResult::from_bool(translator().module_to_upstream(&module) == module)
}

#[test]
fn earlier_rules_take_precedence() {
    let table = RuleTable::new(vec![
        Rule::regex("nova", pymod2pkg::transform::Transform::RdoXstatic).unwrap(),
        Rule::multi(&["nova"], pymod2pkg::transform::Transform::OpenstackPrefix),
    ]);

    assert_eq!(
        translator()
            .module_to_package_with(&table, "nova", "rdo", &[PythonVersion::Py2])
            .unwrap(),
        Resolution::Single("python-nova".to_owned())
    );
}

#[test]
fn ubuntu_explicit_rule() {
    assert_eq!(
        translator()
            .module_to_package("PyYAML", "Ubuntu", &[PythonVersion::Py2])
            .unwrap()
            .to_string(),
        "python-yaml"
    );
    assert_eq!(
        translator().package_pair("python-novaclient", "ubuntu"),
        PackagePair::new("python-novaclient", "python3-novaclient")
    );
}

#[test]
fn suse_scenarios() {
    let translator = translator();

    assert_eq!(
        translator
            .module_to_package("devel", "SUSE", &[PythonVersion::Py2, PythonVersion::Py3])
            .unwrap()
            .to_string(),
        "python-devel python3-devel"
    );
    assert_eq!(
        translator
            .module_to_package("unknown-pkg", "openSUSE", &[PythonVersion::Py2, PythonVersion::Py3])
            .unwrap()
            .to_string(),
        "python2-unknown-pkg python3-unknown-pkg"
    );
    assert_eq!(
        translator.package_pair("nova", "SLES for SUSE"),
        PackagePair::new("openstack-nova", "")
    );
    assert_eq!(
        translator.package_pair("python-heatclient", "opensuse"),
        PackagePair::new("python2-heatclient", "python3-heatclient")
    );
}

#[test]
fn rdo_specific_rules() {
    let translator = translator();

    assert_eq!(
        translator.package_pair("IPy", "Fedora"),
        PackagePair::new("python-IPy", "python-IPy-python3")
    );
    assert_eq!(
        translator.package_pair("XStatic-term.js", "Fedora"),
        PackagePair::new("python-XStatic-termjs", "python3-XStatic-termjs")
    );
    assert_eq!(
        translator.package_pair("horizon", "Fedora"),
        PackagePair::same("openstack-dashboard")
    );
    assert_eq!(
        translator.package_pair("oslo.messaging", "Red Hat Enterprise Linux"),
        PackagePair::new("python-oslo-messaging", "python3-oslo-messaging")
    );
}

#[test]
fn upstream_names() {
    let translator = translator();

    assert_eq!(translator.module_to_upstream("keystoneauth1"), "keystoneauth");
    assert_eq!(
        translator.module_to_upstream("XStatic-smart-table"),
        "xstatic-angular-smart-table"
    );
    assert_eq!(translator.module_to_upstream("nova"), "nova");
}

#[test]
fn translator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Translator>();
}
