//! Repository version checks and URL helpers.

use crate::error::{RepoError, Result};
use pep440_rs::Version;
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;

/// Checks a repository version declared by a page against the supported one.
///
/// Fails when the declared `(epoch, major)` is greater than the supported
/// one. A greater minor component is tolerated but logged as a warning.
/// Missing release components count as zero.
///
/// # Errors
///
/// Returns [`RepoError::UnsupportedRepoVersion`] for a newer major version
/// and [`RepoError::InvalidRepoVersion`] when either string is not a PEP 440
/// version.
///
/// # Examples
///
/// ```
/// use simple_repo::util::check_repo_version;
///
/// assert!(check_repo_version("1.0", "1.0").is_ok());
/// assert!(check_repo_version("1.3", "1.2").is_ok());
/// assert!(check_repo_version("2.0", "1.4").is_err());
/// ```
pub fn check_repo_version(declared_version: &str, supported_version: &str) -> Result<()> {
    let declared = parse_repo_version(declared_version)?;
    let supported = parse_repo_version(supported_version)?;

    if (declared.epoch(), release_part(&declared, 0))
        > (supported.epoch(), release_part(&supported, 0))
    {
        return Err(RepoError::unsupported_repo_version(
            declared_version,
            supported_version,
        ));
    }

    if release_part(&declared, 1) > release_part(&supported, 1) {
        tracing::warn!(
            declared = declared_version,
            supported = supported_version,
            "Repository's version ({}) has greater minor component than supported version ({})",
            declared_version,
            supported_version
        );
    }

    Ok(())
}

fn parse_repo_version(version: &str) -> Result<Version> {
    Version::from_str(version).map_err(|e| RepoError::invalid_repo_version(version, e.to_string()))
}

fn release_part(version: &Version, index: usize) -> u64 {
    version.release().get(index).copied().unwrap_or(0)
}

/// Resolves `url` against `base_url`, if one is given.
///
/// # Errors
///
/// Returns [`RepoError::InvalidUrl`] if `base_url` is not an absolute URL or
/// `url` cannot be joined onto it.
pub fn basejoin(base_url: Option<&str>, url: &str) -> Result<String> {
    let Some(base_url) = base_url else {
        return Ok(url.to_string());
    };

    let base = Url::parse(base_url).map_err(|e| RepoError::invalid_url(base_url, e))?;
    let joined = base.join(url).map_err(|e| RepoError::invalid_url(url, e))?;
    Ok(joined.into())
}

/// Appends `suffix` to the path of `url`, dropping any query or fragment.
///
/// Relative URLs are handled textually.
///
/// # Examples
///
/// ```
/// use simple_repo::util::url_add_suffix;
///
/// assert_eq!(
///     url_add_suffix("https://example.com/pkg-1.0.tar.gz?x=1#sha256=abc", ".asc"),
///     "https://example.com/pkg-1.0.tar.gz.asc",
/// );
/// assert_eq!(url_add_suffix("../pkg-1.0.tar.gz#md5=0", ".metadata"), "../pkg-1.0.tar.gz.metadata");
/// ```
pub fn url_add_suffix(url: &str, suffix: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let path = format!("{}{}", parsed.path(), suffix);
            parsed.set_path(&path);
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.into()
        }
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            format!("{}{}", &url[..end], suffix)
        }
    }
}

/// Splits a `name=value` digest fragment off a package URL.
///
/// Returns the URL without its fragment and the digests it carried. A
/// fragment with an empty value carries no digests.
pub(crate) fn split_digest_fragment(url: &str) -> (String, BTreeMap<String, String>) {
    let Some((base, fragment)) = url.split_once('#') else {
        return (url.to_string(), BTreeMap::new());
    };

    let mut digests = BTreeMap::new();
    if let Some((name, value)) = fragment.split_once('=')
        && !value.is_empty()
    {
        digests.insert(name.to_string(), value.to_string());
    }

    (base.to_string(), digests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_repo_version_same() {
        assert!(check_repo_version("1.0", "1.0").is_ok());
    }

    #[test]
    fn test_check_repo_version_greater_minor_is_ok() {
        assert!(check_repo_version("1.3", "1.2").is_ok());
    }

    #[test]
    fn test_check_repo_version_greater_major() {
        let err = check_repo_version("42.0", "1.0").unwrap_err();
        match err {
            RepoError::UnsupportedRepoVersion {
                declared,
                supported,
            } => {
                assert_eq!(declared, "42.0");
                assert_eq!(supported, "1.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_repo_version_epoch() {
        assert!(check_repo_version("1!0.1", "1.0").is_err());
    }

    #[test]
    fn test_check_repo_version_single_component() {
        assert!(check_repo_version("1", "1.0").is_ok());
        assert!(check_repo_version("2", "1.9").is_err());
    }

    #[test]
    fn test_check_repo_version_invalid() {
        let err = check_repo_version("not a version", "1.0").unwrap_err();
        assert!(matches!(err, RepoError::InvalidRepoVersion { .. }));
    }

    #[test]
    fn test_basejoin_without_base() {
        assert_eq!(basejoin(None, "../x.whl").unwrap(), "../x.whl");
    }

    #[test]
    fn test_basejoin_relative() {
        assert_eq!(
            basejoin(
                Some("https://test.nil/simple/argset/"),
                "packages/argset-0.1.0.tar.gz"
            )
            .unwrap(),
            "https://test.nil/simple/argset/packages/argset-0.1.0.tar.gz"
        );
    }

    #[test]
    fn test_basejoin_absolute_url_wins() {
        assert_eq!(
            basejoin(
                Some("https://test.nil/simple/argset/"),
                "https://files.example.com/argset-0.1.0.tar.gz"
            )
            .unwrap(),
            "https://files.example.com/argset-0.1.0.tar.gz"
        );
    }

    #[test]
    fn test_basejoin_invalid_base() {
        let err = basejoin(Some("not a url"), "x.whl").unwrap_err();
        assert!(matches!(err, RepoError::InvalidUrl { .. }));
    }

    #[test]
    fn test_url_add_suffix() {
        assert_eq!(
            url_add_suffix("https://files.example.com/qypi-0.1.0-py3-none-any.whl", ".asc"),
            "https://files.example.com/qypi-0.1.0-py3-none-any.whl.asc"
        );
    }

    #[test]
    fn test_split_digest_fragment() {
        let (url, digests) = split_digest_fragment("https://x.nil/a.whl#sha256=abc123");
        assert_eq!(url, "https://x.nil/a.whl");
        assert_eq!(digests.get("sha256").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn test_split_digest_fragment_without_digest() {
        for suffix in ["", "#", "#sha256", "#sha256="] {
            let (url, digests) = split_digest_fragment(&format!("https://x.nil/a.whl{suffix}"));
            assert_eq!(url, "https://x.nil/a.whl");
            assert!(digests.is_empty(), "{suffix:?} should carry no digests");
        }
    }
}
