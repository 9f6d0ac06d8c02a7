//! Distribution package records.

use crate::error::Result;
use crate::link::Link;
use crate::pep691::File;
use crate::util::{basejoin, split_digest_fragment, url_add_suffix};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use simple_core::{PackageType, ParsedFilename, classify};
use std::collections::BTreeMap;

/// `alg=hex` value of a `data-core-metadata` attribute.
static METADATA_DIGEST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+)=([0-9A-Fa-f]+)$").expect("metadata digest pattern must compile")
});

/// A downloadable file listed on a project page.
///
/// `project`, `version` and `package_type` are all `None` when the filename
/// could not be classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionPackage {
    pub filename: String,
    /// Download URL without the digest fragment
    pub url: String,
    pub project: Option<String>,
    pub version: Option<String>,
    pub package_type: Option<PackageType>,
    /// Digests of the file keyed by algorithm name
    pub digests: BTreeMap<String, String>,
    pub requires_python: Option<String>,
    /// Whether a PGP signature is available at [`sig_url`](Self::sig_url);
    /// `None` when the repository does not say
    pub has_sig: Option<bool>,
    pub is_yanked: bool,
    pub yanked_reason: Option<String>,
    /// Whether core metadata is available at
    /// [`metadata_url`](Self::metadata_url); `None` when the repository does
    /// not say
    pub has_metadata: Option<bool>,
    pub metadata_digests: Option<BTreeMap<String, String>>,
    pub size: Option<u64>,
    pub upload_time: Option<DateTime<FixedOffset>>,
    /// SHA-256 of the PEP 740 provenance file
    pub provenance_sha256: Option<String>,
}

impl DistributionPackage {
    /// Builds a package from a link on an HTML project page.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_core::PackageType;
    /// use simple_repo::{DistributionPackage, Link};
    ///
    /// let link = Link::new(
    ///     "qypi-0.1.0-py3-none-any.whl",
    ///     "https://files.example.com/qypi-0.1.0-py3-none-any.whl#sha256=f0e1",
    /// )
    /// .with_attr("data-gpg-sig", "TRUE");
    ///
    /// let pkg = DistributionPackage::from_link(&link, Some("qypi"));
    /// assert_eq!(pkg.package_type, Some(PackageType::Wheel));
    /// assert_eq!(pkg.url, "https://files.example.com/qypi-0.1.0-py3-none-any.whl");
    /// assert_eq!(pkg.digests["sha256"], "f0e1");
    /// assert_eq!(pkg.has_sig, Some(true));
    /// ```
    pub fn from_link(link: &Link, project_hint: Option<&str>) -> Self {
        let parsed = parse_or_none(&link.text, project_hint);
        let (url, digests) = split_digest_fragment(&link.url);

        let has_sig = link
            .get_str_attrib("data-gpg-sig")
            .map(|value| value.eq_ignore_ascii_case("true"));

        let (has_metadata, metadata_digests) = match link.get_str_attrib("data-core-metadata") {
            Some(value) => {
                let (has, digests) = parse_core_metadata(value);
                (Some(has), Some(digests))
            }
            None => (None, None),
        };

        let yanked_reason = link.get_str_attrib("data-yanked").map(str::to_string);

        let (project, version, package_type) = split_parsed(parsed);
        Self {
            filename: link.text.clone(),
            url,
            project,
            version,
            package_type,
            digests,
            requires_python: link
                .get_str_attrib("data-requires-python")
                .map(str::to_string),
            has_sig,
            is_yanked: yanked_reason.is_some(),
            yanked_reason,
            has_metadata,
            metadata_digests,
            size: None,
            upload_time: None,
            provenance_sha256: link.get_str_attrib("data-provenance").map(str::to_string),
        }
    }

    /// Builds a package from a file entry of a PEP 691 project response.
    ///
    /// A relative file URL is resolved against `base_url` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::InvalidUrl`](crate::RepoError::InvalidUrl) if the
    /// URL cannot be joined onto `base_url`.
    pub fn from_file(file: &File, project_hint: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let parsed = parse_or_none(&file.filename, project_hint);
        let (project, version, package_type) = split_parsed(parsed);

        Ok(Self {
            filename: file.filename.clone(),
            url: basejoin(base_url, &file.url)?,
            project,
            version,
            package_type,
            digests: file.hashes.clone(),
            requires_python: file.requires_python.clone(),
            has_sig: file.gpg_sig,
            is_yanked: file.is_yanked(),
            yanked_reason: file.yanked_reason().map(str::to_string),
            has_metadata: file.has_metadata(),
            metadata_digests: file.metadata_digests(),
            size: file.size,
            upload_time: file.upload_time,
            provenance_sha256: file.provenance.clone(),
        })
    }

    /// Builds a package from one JSON object of a PEP 691 `files` list.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Json`](crate::RepoError::Json) if the object is
    /// not a valid file entry.
    pub fn from_json_str(
        json: &str,
        project_hint: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let file: File = serde_json::from_str(json)?;
        Self::from_file(&file, project_hint, base_url)
    }

    /// URL of the PGP signature file
    pub fn sig_url(&self) -> String {
        url_add_suffix(&self.url, ".asc")
    }

    /// URL of the core metadata file (PEP 658)
    pub fn metadata_url(&self) -> String {
        url_add_suffix(&self.url, ".metadata")
    }

    /// URL of the provenance file (PEP 740)
    pub fn provenance_url(&self) -> String {
        url_add_suffix(&self.url, ".provenance")
    }
}

fn parse_or_none(filename: &str, project_hint: Option<&str>) -> Option<ParsedFilename> {
    match classify(filename, project_hint) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(filename, "{}", e);
            None
        }
    }
}

fn split_parsed(
    parsed: Option<ParsedFilename>,
) -> (Option<String>, Option<String>, Option<PackageType>) {
    match parsed {
        Some(p) => (Some(p.project), Some(p.version), Some(p.package_type)),
        None => (None, None, None),
    }
}

fn parse_core_metadata(value: &str) -> (bool, BTreeMap<String, String>) {
    let mut digests = BTreeMap::new();
    if let Some(caps) = METADATA_DIGEST.captures(value) {
        digests.insert(caps[1].to_string(), caps[2].to_string());
        return (true, digests);
    }
    (value.eq_ignore_ascii_case("true"), digests)
}
