use crate::error::UnknownPackageType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build format of a distribution package.
///
/// Serialized as the lowercase tag used throughout the Python packaging
/// ecosystem (`"wheel"`, `"sdist"`, ...).
///
/// # Examples
///
/// ```
/// use simple_core::PackageType;
///
/// let ty: PackageType = "wininst".parse().unwrap();
/// assert_eq!(ty, PackageType::Wininst);
/// assert_eq!(ty.to_string(), "wininst");
/// assert!("deb".parse::<PackageType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// `bdist_dumb` archive (`.tar.gz`/`.zip` with a platform suffix)
    Dumb,
    /// setuptools egg
    Egg,
    /// `bdist_msi` Windows installer
    Msi,
    /// `bdist_rpm` package
    Rpm,
    /// Source distribution
    Sdist,
    /// Wheel (PEP 427)
    Wheel,
    /// `bdist_wininst` Windows executable installer
    Wininst,
}

impl PackageType {
    /// Every package type, in alphabetical order.
    pub const ALL: [Self; 7] = [
        Self::Dumb,
        Self::Egg,
        Self::Msi,
        Self::Rpm,
        Self::Sdist,
        Self::Wheel,
        Self::Wininst,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dumb => "dumb",
            Self::Egg => "egg",
            Self::Msi => "msi",
            Self::Rpm => "rpm",
            Self::Sdist => "sdist",
            Self::Wheel => "wheel",
            Self::Wininst => "wininst",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = UnknownPackageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownPackageType(s.to_string()))
    }
}
