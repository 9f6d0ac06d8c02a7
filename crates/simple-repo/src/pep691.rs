//! PEP 691 JSON response models.
//!
//! Keys are kebab-case on the wire. Fields added by later PEPs (700, 708,
//! 740, 792) are optional so that older repositories still deserialize.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Status marker of a project (PEP 792).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// The project is active. This is the default.
    Active,
    /// The project does not expect to be updated in the future.
    Archived,
    /// The project is considered generally unsafe for use, e.g. malware.
    Quarantined,
    /// The project is obsolete and may have been superseded.
    Deprecated,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Quarantined => "quarantined",
            Self::Deprecated => "deprecated",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meta {
    #[serde(rename = "api-version")]
    pub api_version: String,
    #[serde(rename = "_last-serial", default, deserialize_with = "string_or_int")]
    pub last_serial: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectMeta {
    #[serde(rename = "api-version")]
    pub api_version: String,
    #[serde(rename = "_last-serial", default, deserialize_with = "string_or_int")]
    pub last_serial: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusData {
    pub status: Option<ProjectStatus>,
    pub reason: Option<String>,
}

/// `core-metadata` value: a flag or a map of digests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CoreMetadata {
    Flag(bool),
    Digests(BTreeMap<String, String>),
}

/// `yanked` value: a flag or a (possibly empty) reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Yanked {
    Flag(bool),
    Reason(String),
}

impl Default for Yanked {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// One entry of a project's `files` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct File {
    pub filename: String,
    pub url: String,
    pub hashes: BTreeMap<String, String>,
    #[serde(default)]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub core_metadata: Option<CoreMetadata>,
    #[serde(default)]
    pub gpg_sig: Option<bool>,
    #[serde(default)]
    pub yanked: Yanked,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub upload_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub provenance: Option<String>,
}

impl File {
    pub fn is_yanked(&self) -> bool {
        match &self.yanked {
            Yanked::Flag(flag) => *flag,
            Yanked::Reason(_) => true,
        }
    }

    pub fn yanked_reason(&self) -> Option<&str> {
        match &self.yanked {
            Yanked::Flag(_) => None,
            Yanked::Reason(reason) => Some(reason),
        }
    }

    pub fn has_metadata(&self) -> Option<bool> {
        match &self.core_metadata {
            Some(CoreMetadata::Flag(flag)) => Some(*flag),
            Some(CoreMetadata::Digests(_)) => Some(true),
            None => None,
        }
    }

    pub fn metadata_digests(&self) -> Option<BTreeMap<String, String>> {
        match &self.core_metadata {
            Some(CoreMetadata::Digests(digests)) => Some(digests.clone()),
            Some(CoreMetadata::Flag(true)) => Some(BTreeMap::new()),
            Some(CoreMetadata::Flag(false)) | None => None,
        }
    }
}

/// A project detail response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    pub name: String,
    pub files: Vec<File>,
    pub meta: ProjectMeta,
    #[serde(default)]
    pub alternate_locations: Vec<String>,
    #[serde(default)]
    pub project_status: StatusData,
    #[serde(default)]
    pub versions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectItem {
    pub name: String,
}

/// An index (project list) response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectItem>,
    pub meta: Meta,
}

/// Accepts `_last-serial` as either a string or an integer.
fn string_or_int<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Serial {
        Int(u64),
        Str(String),
    }

    Ok(Option::<Serial>::deserialize(deserializer)?.map(|serial| match serial {
        Serial::Int(n) => n.to_string(),
        Serial::Str(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_json(extra: &str) -> String {
        format!(
            r#"{{
                "filename": "argset-0.1.0-py3-none-any.whl",
                "hashes": {{"sha256": "107a632c"}},
                "requires-python": "~=3.6",
                "url": "https://files.example.com/argset-0.1.0-py3-none-any.whl"
                {extra}
            }}"#
        )
    }

    #[test]
    fn test_file_minimal() {
        let file: File = serde_json::from_str(&file_json("")).unwrap();
        assert_eq!(file.requires_python.as_deref(), Some("~=3.6"));
        assert!(!file.is_yanked());
        assert_eq!(file.yanked_reason(), None);
        assert_eq!(file.has_metadata(), None);
        assert_eq!(file.metadata_digests(), None);
        assert_eq!(file.gpg_sig, None);
    }

    #[test]
    fn test_file_yanked_reason() {
        let file: File = serde_json::from_str(&file_json(r#", "yanked": "not good""#)).unwrap();
        assert!(file.is_yanked());
        assert_eq!(file.yanked_reason(), Some("not good"));

        let file: File = serde_json::from_str(&file_json(r#", "yanked": """#)).unwrap();
        assert!(file.is_yanked());
        assert_eq!(file.yanked_reason(), Some(""));

        let file: File = serde_json::from_str(&file_json(r#", "yanked": true"#)).unwrap();
        assert!(file.is_yanked());
        assert_eq!(file.yanked_reason(), None);
    }

    #[test]
    fn test_file_core_metadata_variants() {
        let cases = [
            ("false", Some(false), None),
            ("true", Some(true), Some(BTreeMap::new())),
            ("{}", Some(true), Some(BTreeMap::new())),
            (
                r#"{"sha256": "abc123"}"#,
                Some(true),
                Some(BTreeMap::from([("sha256".to_string(), "abc123".to_string())])),
            ),
        ];
        for (value, has_metadata, digests) in cases {
            let file: File =
                serde_json::from_str(&file_json(&format!(r#", "core-metadata": {value}"#)))
                    .unwrap();
            assert_eq!(file.has_metadata(), has_metadata, "{value}");
            assert_eq!(file.metadata_digests(), digests, "{value}");
        }
    }

    #[test]
    fn test_file_upload_time_and_size() {
        let file: File = serde_json::from_str(&file_json(
            r#", "size": 1234, "upload-time": "2021-07-05T19:11:25.545547Z""#,
        ))
        .unwrap();
        assert_eq!(file.size, Some(1234));
        let uploaded = file.upload_time.unwrap();
        assert_eq!(uploaded.timestamp(), 1_625_512_285);
    }

    #[test]
    fn test_file_rejects_wrong_types() {
        assert!(serde_json::from_str::<File>(&file_json(r#", "gpg-sig": "yes""#)).is_err());
        assert!(serde_json::from_str::<File>(r#"{"filename": "x"}"#).is_err());
    }

    #[test]
    fn test_meta_last_serial_int_or_string() {
        let meta: Meta =
            serde_json::from_str(r#"{"api-version": "1.0", "_last-serial": 10562871}"#).unwrap();
        assert_eq!(meta.last_serial.as_deref(), Some("10562871"));

        let meta: Meta =
            serde_json::from_str(r#"{"api-version": "1.0", "_last-serial": "42"}"#).unwrap();
        assert_eq!(meta.last_serial.as_deref(), Some("42"));

        let meta: Meta = serde_json::from_str(r#"{"api-version": "1.0"}"#).unwrap();
        assert_eq!(meta.last_serial, None);
    }

    #[test]
    fn test_project_status() {
        let project: Project = serde_json::from_str(
            r#"{"name": "old", "files": [], "meta": {"api-version": "1.4"},
                "project-status": {"status": "archived", "reason": "done"}}"#,
        )
        .unwrap();
        assert_eq!(project.project_status.status, Some(ProjectStatus::Archived));
        assert_eq!(project.project_status.reason.as_deref(), Some("done"));
        assert_eq!(ProjectStatus::Archived.to_string(), "archived");
    }

    #[test]
    fn test_project_list() {
        let list: ProjectList = serde_json::from_str(
            r#"{"meta": {"api-version": "1.0"}, "projects": [{"name": "a"}, {"name": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(list.projects.len(), 2);
        assert_eq!(list.projects[1].name, "B");
    }
}
