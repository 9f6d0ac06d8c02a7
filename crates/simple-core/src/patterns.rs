//! Filename grammars for every supported package type.
//!
//! The tables are ordered and the order is load-bearing: it decides which
//! grammar wins when more than one could match the same filename.
//!
//! Egg, rpm and wheel filenames carry a fixed number of trailing
//! dash-separated fields, so a regex can find the name/version boundary on
//! its own. Dumb, msi, sdist and wininst filenames do not: their version may
//! itself contain dashes. For those only the `-{version}...` suffix is
//! declared here, and the project name in front of it is either supplied by a
//! hint or matched generically.

use crate::package_type::PackageType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Project name; must start and end with an alphanumeric character.
pub(crate) const PROJECT_NAME: &str = r"[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?";

/// Project name for grammars that use `-` as the field separator.
pub(crate) const PROJECT_NAME_NODASH: &str = r"[A-Za-z0-9](?:[A-Za-z0-9._]*[A-Za-z0-9])?";

pub(crate) const VERSION: &str = r"[A-Za-z0-9_.!+-]+?";

pub(crate) const VERSION_NODASH: &str = r"[A-Za-z0-9_.!+]+?";

pub(crate) const ARCHIVE_EXT: &str = r"\.(?:tar|tar\.(?:bz2|gz|lz|lzma|xz|Z)|tbz|tgz|tlz|txz|zip)";

pub(crate) const PLAT_NAME: &str =
    r"(?:aix|cygwin|darwin|linux|macosx|solaris|sunos|[wW]in)[-.A-Za-z0-9_]*";

pub(crate) const PYVER: &str = r"py[0-9]+\.[0-9]+";

/// A package type paired with the grammar that recognizes it.
#[derive(Debug)]
pub(crate) struct PackagePattern {
    pub package_type: PackageType,
    pub regex: Regex,
}

impl PackagePattern {
    fn new(package_type: PackageType, pattern: &str) -> Self {
        Self {
            package_type,
            regex: Regex::new(pattern).expect("filename grammar must compile"),
        }
    }
}

/// Fully anchored grammars that split name and version unambiguously.
///
/// Each has `project` and `version` capture groups.
pub(crate) static GOOD_PATTERNS: Lazy<Vec<PackagePattern>> = Lazy::new(|| {
    vec![
        // https://setuptools.pypa.io/en/latest/deprecated/python_eggs.html#filename-embedded-metadata
        PackagePattern::new(
            PackageType::Egg,
            &format!(
                r"^(?P<project>{PROJECT_NAME_NODASH})-(?P<version>{VERSION_NODASH})(?:-{PYVER}(?:-{PLAT_NAME})?)?\.egg$"
            ),
        ),
        // The architecture part is a best guess based on what PyPI hosts.
        PackagePattern::new(
            PackageType::Rpm,
            &format!(
                r"^(?P<project>{PROJECT_NAME})-(?P<version>{VERSION_NODASH})-[^-]+\.[A-Za-z0-9._]+\.rpm$"
            ),
        ),
        // Lenient on the tags so that wheels pip accepts are accepted here too.
        PackagePattern::new(
            PackageType::Wheel,
            &format!(
                r"^(?P<project>{PROJECT_NAME_NODASH})-(?P<version>{VERSION_NODASH})(-[0-9][^-]*?)?-.+?-.+?-.+?\.whl$"
            ),
        ),
    ]
});

/// Unanchored `-{version}...` suffixes of the ambiguous grammars, in priority
/// order.
fn bad_suffixes() -> [(PackageType, String); 4] {
    [
        (
            PackageType::Dumb,
            format!(r"-(?P<version>{VERSION})\.{PLAT_NAME}{ARCHIVE_EXT}"),
        ),
        (
            PackageType::Msi,
            format!(r"-(?P<version>{VERSION})\.{PLAT_NAME}(?:-{PYVER})?\.msi"),
        ),
        (
            PackageType::Sdist,
            format!(r"-(?P<version>{VERSION}){ARCHIVE_EXT}"),
        ),
        (
            PackageType::Wininst,
            format!(r"-(?P<version>{VERSION})\.{PLAT_NAME}(?:-{PYVER})?\.exe"),
        ),
    ]
}

/// Ambiguous grammars without a project name, anchored at the start of the
/// text that follows an already matched project name.
///
/// Each has a `version` capture group.
pub(crate) static BAD_SUFFIX_PATTERNS: Lazy<Vec<PackagePattern>> = Lazy::new(|| {
    bad_suffixes()
        .into_iter()
        .map(|(ty, suffix)| PackagePattern::new(ty, &format!("^{suffix}$")))
        .collect()
});

/// Ambiguous grammars with a generic project name prepended.
///
/// Each has `project` and `version` capture groups.
pub(crate) static BAD_PATTERNS: Lazy<Vec<PackagePattern>> = Lazy::new(|| {
    bad_suffixes()
        .into_iter()
        .map(|(ty, suffix)| {
            PackagePattern::new(ty, &format!("^(?P<project>{PROJECT_NAME}){suffix}$"))
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn types(patterns: &[PackagePattern]) -> Vec<PackageType> {
        patterns.iter().map(|p| p.package_type).collect()
    }

    #[test]
    fn test_good_pattern_order() {
        assert_eq!(
            types(&GOOD_PATTERNS),
            vec![PackageType::Egg, PackageType::Rpm, PackageType::Wheel]
        );
    }

    #[test]
    fn test_bad_pattern_order() {
        let expected = vec![
            PackageType::Dumb,
            PackageType::Msi,
            PackageType::Sdist,
            PackageType::Wininst,
        ];
        assert_eq!(types(&BAD_PATTERNS), expected);
        assert_eq!(types(&BAD_SUFFIX_PATTERNS), expected);
    }

    #[test]
    fn test_project_name_fragment() {
        let re = Regex::new(&format!("^{PROJECT_NAME}$")).unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("line.sep"));
        assert!(re.is_match("Appium-Python-Client"));
        assert!(!re.is_match("pypol_"));
        assert!(!re.is_match("-leading"));
        assert!(!re.is_match("aa utility"));
    }

    #[test]
    fn test_nodash_fragments_reject_dash() {
        let name = Regex::new(&format!("^{PROJECT_NAME_NODASH}$")).unwrap();
        let version = Regex::new(&format!("^{VERSION_NODASH}$")).unwrap();
        assert!(name.is_match("pypi_simple"));
        assert!(!name.is_match("pypi-simple"));
        assert!(version.is_match("1!1.3.3"));
        assert!(!version.is_match("3.8.2-r1"));
    }

    #[test]
    fn test_archive_ext_fragment() {
        let re = Regex::new(&format!("^{ARCHIVE_EXT}$")).unwrap();
        for ext in [
            ".tar", ".tar.bz2", ".tar.gz", ".tar.lz", ".tar.lzma", ".tar.xz", ".tar.Z", ".tbz",
            ".tgz", ".tlz", ".txz", ".zip",
        ] {
            assert!(re.is_match(ext), "{ext} should be an archive extension");
        }
        assert!(!re.is_match(".tar.zst"));
        assert!(!re.is_match(".rar"));
    }

    #[test]
    fn test_platform_fragment() {
        let re = Regex::new(&format!("^{PLAT_NAME}$")).unwrap();
        assert!(re.is_match("linux-x86_64"));
        assert!(re.is_match("macosx-10.9-intel"));
        assert!(re.is_match("Win32"));
        assert!(re.is_match("win-amd64"));
        assert!(!re.is_match("WIN32"));
        assert!(!re.is_match("freebsd"));
    }

    #[test]
    fn test_pyver_fragment() {
        let re = Regex::new(&format!("^{PYVER}$")).unwrap();
        assert!(re.is_match("py3.9"));
        assert!(re.is_match("py2.7"));
        assert!(!re.is_match("py3"));
        assert!(!re.is_match("py2.7.10"));
    }
}
