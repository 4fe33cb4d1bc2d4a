//! Grouping of distributions sharing packaging conventions.

use std::fmt;

use crate::transform::Transform;

/// Family of distributions sharing a naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionFamily {
    /// Fedora/RDO style; also used for any unrecognized distribution
    Rdo,
    /// openSUSE and SLES
    Suse,
    /// Ubuntu
    Ubuntu,
}

impl DistributionFamily {
    /// Determine the family of a distribution name such as `openSUSE Leap`.
    ///
    /// The check is a case-insensitive substring search, `suse` before `ubuntu`.
    pub fn from_distribution(distribution: &str) -> Self {
        let distribution = distribution.to_lowercase();
        if distribution.contains("suse") {
            DistributionFamily::Suse
        } else if distribution.contains("ubuntu") {
            DistributionFamily::Ubuntu
        } else {
            DistributionFamily::Rdo
        }
    }

    /// Transformation used when no rule of the family's table matches
    pub fn default_transform(&self) -> Transform {
        match self {
            DistributionFamily::Rdo => Transform::DefaultRdo,
            DistributionFamily::Suse => Transform::DefaultSuse,
            DistributionFamily::Ubuntu => Transform::DefaultUbuntu,
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistributionFamily::Rdo => "rdo",
            DistributionFamily::Suse => "suse",
            DistributionFamily::Ubuntu => "ubuntu",
        })
    }
}
