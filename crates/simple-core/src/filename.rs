//! Distribution filename classification.
//!
//! [`classify`] splits a filename such as `requests-2.31.0-py3-none-any.whl`
//! into a project name, a version and a [`PackageType`]. Extracted substrings
//! are returned exactly as spelled in the filename; nothing is normalized and
//! versions are not validated.

use crate::error::UnparsableFilename;
use crate::package_type::PackageType;
use crate::patterns::{BAD_PATTERNS, BAD_SUFFIX_PATTERNS, GOOD_PATTERNS, PackagePattern};
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

/// Result of classifying a distribution filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedFilename {
    /// Project name as spelled in the filename
    pub project: String,
    /// Version as spelled in the filename
    pub version: String,
    /// Build format of the package
    pub package_type: PackageType,
}

impl ParsedFilename {
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        package_type: PackageType,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            package_type,
        }
    }
}

impl FromStr for ParsedFilename {
    type Err = UnparsableFilename;

    /// Classifies without a project hint.
    fn from_str(filename: &str) -> Result<Self, Self::Err> {
        classify(filename, None)
    }
}

/// Splits a distribution filename into project, version and package type.
///
/// `project_hint` is the (unnormalized) name of the project page the file was
/// listed on. It is only consulted for grammars where the name/version
/// boundary is ambiguous, such as `walt-node-0.4-1.tar.gz`. If the filename
/// cannot be parsed with the hint in the role of the project name, the split
/// falls back to a generic project-name pattern.
///
/// The stages run in order and the first match wins:
///
/// 1. egg, rpm and wheel grammars against the whole filename (hint ignored)
/// 2. with a hint: match the hint case- and separator-insensitively as a
///    prefix followed by `-`, then the dumb, msi, sdist and wininst suffix
///    grammars against the remainder
/// 3. dumb, msi, sdist and wininst grammars with a generic project name
///
/// # Errors
///
/// Returns [`UnparsableFilename`] when no stage matches.
///
/// # Examples
///
/// ```
/// use simple_core::{PackageType, ParsedFilename, classify};
///
/// assert_eq!(
///     classify("qypi-0.4.1-py3-none-any.whl", None).unwrap(),
///     ParsedFilename::new("qypi", "0.4.1", PackageType::Wheel),
/// );
///
/// assert_eq!(
///     classify("walt-node-0.4-1.tar.gz", Some("walt_node")).unwrap(),
///     ParsedFilename::new("walt-node", "0.4-1", PackageType::Sdist),
/// );
///
/// assert!(classify("pip-18.0.txt", Some("pip")).is_err());
/// ```
pub fn classify(
    filename: &str,
    project_hint: Option<&str>,
) -> Result<ParsedFilename, UnparsableFilename> {
    if let Some(parsed) = match_anchored(&GOOD_PATTERNS, filename) {
        return Ok(parsed);
    }

    if let Some(hint) = project_hint
        && let Some(parsed) = match_hinted(filename, hint)
    {
        return Ok(parsed);
    }

    match_anchored(&BAD_PATTERNS, filename).ok_or_else(|| UnparsableFilename::new(filename))
}

fn match_anchored(patterns: &[PackagePattern], filename: &str) -> Option<ParsedFilename> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(filename)?;
        Some(ParsedFilename::new(
            caps.name("project")?.as_str(),
            caps.name("version")?.as_str(),
            pattern.package_type,
        ))
    })
}

fn match_hinted(filename: &str, hint: &str) -> Option<ParsedFilename> {
    let prefix = Regex::new(&format!("^(?P<project>{})-", hint_pattern(hint))).ok()?;
    let project = prefix.captures(filename)?.name("project")?;
    let rest_of_name = &filename[project.end()..];

    BAD_SUFFIX_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(rest_of_name)?;
        Some(ParsedFilename::new(
            project.as_str(),
            caps.name("version")?.as_str(),
            pattern.package_type,
        ))
    })
}

/// Turns a project hint into a case- and separator-insensitive pattern.
///
/// Runs of non-alphanumeric characters become `[-_.]+`, ASCII letters become
/// a class of both cases, digits pass through.
pub(crate) fn hint_pattern(hint: &str) -> String {
    let mut pattern = String::with_capacity(hint.len() * 4);
    let mut in_separator = false;

    for c in hint.chars() {
        if c.is_ascii_alphanumeric() {
            in_separator = false;
            if c.is_ascii_alphabetic() {
                pattern.push('[');
                pattern.push(c.to_ascii_uppercase());
                pattern.push(c.to_ascii_lowercase());
                pattern.push(']');
            } else {
                pattern.push(c);
            }
        } else if !in_separator {
            in_separator = true;
            pattern.push_str("[-_.]+");
        }
    }

    pattern
}
