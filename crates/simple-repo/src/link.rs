//! Hyperlinks and pages as delivered by an HTML parsing front end.
//!
//! HTML extraction itself happens elsewhere; these types are the flat
//! `(text, url, attributes)` records it hands over.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of an attribute on a link tag.
///
/// Most attributes are plain strings. CDATA list attributes such as `class`
/// hold a list of strings instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    List(Vec<String>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// A hyperlink extracted from a repository page.
///
/// # Examples
///
/// ```
/// use simple_repo::Link;
///
/// let link = Link::new("pip-18.0.tar.gz", "https://files.example.com/pip-18.0.tar.gz")
///     .with_attr("data-requires-python", ">=3.7");
///
/// assert_eq!(link.get_str_attrib("data-requires-python"), Some(">=3.7"));
/// assert_eq!(link.get_str_attrib("data-yanked"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Text inside the link tag, trimmed, with nested tags ignored
    pub text: String,
    /// Target URL, already resolved against the page URL and any `<base>`
    pub url: String,
    /// Attributes of the link tag keyed by lowercase name, including `href`
    #[serde(default)]
    pub attrs: BTreeMap<String, AttrValue>,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Adds an attribute, lowercasing its name.
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Returns a string attribute; `None` when absent or list-valued.
    pub fn get_str_attrib(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name)? {
            AttrValue::Str(value) => Some(value),
            AttrValue::List(_) => None,
        }
    }
}

/// One parsed HTML page of a simple repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPage {
    /// Repository version from the `pypi:repository-version` meta tag
    pub repository_version: Option<String>,
    /// Every link on the page, in document order
    pub links: Vec<Link>,
    /// PEP 708 "tracks" metadata
    #[serde(default)]
    pub tracks: Vec<String>,
    /// PEP 708 "alternate locations" metadata
    #[serde(default)]
    pub alternate_locations: Vec<String>,
}
