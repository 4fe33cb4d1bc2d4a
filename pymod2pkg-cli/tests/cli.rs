use assert_cmd::prelude::*; // Add methods on commands
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command; // Run programs
use test_log::test;

const BIN: &str = "pymod2pkg";

fn pymod2pkg() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.env_remove("PYMOD2PKG_DIST").env_remove("PYMOD2PKG_LOG");
    Ok(cmd)
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = pymod2pkg()?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = pymod2pkg()?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains(BIN));

    cmd = pymod2pkg()?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<MODULENAME>"));

    cmd = pymod2pkg()?;
    cmd.args(["--pyver", "py4", "Babel"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'py4'"));

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "ubuntu", "--upstream", "nova"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    cmd = pymod2pkg()?;
    cmd.args(["-v", "-q", "Babel"]);
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn translate_modules() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = pymod2pkg()?;
    cmd.args(["--dist", "CentOS", "Babel"]);
    cmd.assert().success().stdout("python-babel\n");

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "CentOS", "--pyver", "py3", "requests"]);
    cmd.assert().success().stdout("python3-requests\n");

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "CentOS", "--pyver", "py3", "--pyver", "py2", "nova"]);
    cmd.assert().success().stdout("openstack-nova \n");

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "Ubuntu", "PyYAML"]);
    cmd.assert().success().stdout("python-yaml\n");

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "openSUSE Leap", "--pyver", "py2", "--pyver", "py3"]);
    cmd.arg("unknown-pkg");
    cmd.assert()
        .success()
        .stdout("python2-unknown-pkg python3-unknown-pkg\n");

    cmd = pymod2pkg()?;
    cmd.args(["--pyver", "py3", "Babel"]);
    cmd.env("PYMOD2PKG_DIST", "suse");
    cmd.assert().success().stdout("python3-Babel\n");

    // --dist takes precedence over the environment
    cmd = pymod2pkg()?;
    cmd.args(["--dist", "ubuntu", "--pyver", "py3", "Babel"]);
    cmd.env("PYMOD2PKG_DIST", "suse");
    cmd.assert().success().stdout("python3-babel\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn upstream_names() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = pymod2pkg()?;
    cmd.args(["--upstream", "keystoneauth1"]);
    cmd.assert().success().stdout("keystoneauth\n");

    // a distribution from the environment does not conflict with --upstream
    cmd = pymod2pkg()?;
    cmd.env("PYMOD2PKG_DIST", "ubuntu");
    cmd.args(["--upstream", "keystoneauth1"]);
    cmd.assert().success().stdout("keystoneauth\n");

    cmd = pymod2pkg()?;
    cmd.args(["--upstream", "totally-unknown-project"]);
    cmd.assert().success().stdout("totally-unknown-project\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn custom_rule_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let rules = dir.child("rules.json");
    rules.write_str(
        r#"[
            {"kind": "single", "module": "sphinx", "package": "python-sphinx",
             "overrides": [{"distribution": "epel-6", "python2": "python-sphinx10", "python3": "python3-sphinx10"}]},
            {"kind": "regex", "pattern": "acme-", "transform": "openstack-prefix"}
        ]"#,
    )?;

    let mut cmd = pymod2pkg()?;
    cmd.args(["--dist", "epel-6", "--rules"]).arg(rules.path());
    cmd.arg("sphinx");
    cmd.assert().success().stdout("python-sphinx10\n");

    cmd = pymod2pkg()?;
    cmd.args(["--dist", "fedora", "--rules"]).arg(rules.path());
    cmd.arg("acme-Thing");
    cmd.assert().success().stdout("openstack-acme-thing\n");

    // the built-in table is replaced, the default still applies
    cmd = pymod2pkg()?;
    cmd.args(["--dist", "fedora", "--rules"]).arg(rules.path());
    cmd.arg("Babel");
    cmd.assert().success().stdout("python-babel\n");

    let broken = dir.child("broken.json");
    broken.write_str("[{\"kind\": \"unknown\"}]")?;
    cmd = pymod2pkg()?;
    cmd.args(["--dist", "fedora", "--rules"]).arg(broken.path());
    cmd.arg("Babel");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));

    cmd = pymod2pkg()?;
    cmd.args(["--rules"]).arg(dir.child("missing.json").path());
    cmd.arg("Babel");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unable to read rule file"));

    dir.close()?;
    Ok(())
}
