//! Detection of the distribution the program runs on.

use std::fs::read_to_string;

/// Files consulted in order, see os-release(5)
const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Name of the running distribution, or an empty string if it cannot be determined.
pub fn host_distribution() -> String {
    for path in OS_RELEASE_PATHS {
        match read_to_string(path) {
            Ok(content) => {
                if let Some(name) = distribution_name(&content) {
                    log::debug!("host distribution from {path}: {name}");
                    return name;
                }
            }
            Err(err) => log::trace!("cannot read {path}: {err}"),
        }
    }

    log::info!("unable to detect the host distribution");
    String::new()
}

/// Extract the distribution from os-release content.
///
/// The name is `NAME`, falling back to `PRETTY_NAME` and `ID`. A non-empty `ID_LIKE`
/// is appended in parentheses, so derivatives such as SLES (`ID_LIKE="suse"`)
/// keep the family of their parent distribution.
pub fn distribution_name(content: &str) -> Option<String> {
    let value = |key: &str| {
        content.lines().find_map(|line| {
            let (k, v) = line.trim().split_once('=')?;
            (k == key).then(|| unquote(v.trim()))
        })
    };
    let non_empty = |name: &String| !name.is_empty();

    let name = value("NAME")
        .filter(non_empty)
        .or_else(|| value("PRETTY_NAME").filter(non_empty))
        .or_else(|| value("ID").filter(non_empty))?;

    match value("ID_LIKE").filter(non_empty) {
        Some(like) => Some(format!("{name} ({like})")),
        None => Some(name),
    }
}

fn unquote(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    let inner = if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    };

    inner.replace("\\\"", "\"").replace("\\\\", "\\")
}
