//! Errors raised while building repository records.

use simple_core::UnparsableFilename;
use thiserror::Error;

/// Errors that can occur while turning repository pages into records.
#[derive(Error, Debug)]
pub enum RepoError {
    /// The repository declares a version (PEP 629) whose major component is
    /// greater than the supported one
    #[error(
        "Repository's version ({declared}) has greater major component than supported version ({supported})"
    )]
    UnsupportedRepoVersion { declared: String, supported: String },

    /// A declared or configured repository version is not a PEP 440 version
    #[error("Invalid repository version '{version}': {message}")]
    InvalidRepoVersion { version: String, message: String },

    /// A base URL could not be parsed or joined
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Malformed PEP 691 JSON
    #[error("Failed to parse simple repository JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A distribution filename matched no known grammar
    #[error(transparent)]
    Filename(#[from] UnparsableFilename),
}

/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, RepoError>;

impl RepoError {
    /// Helper for creating unsupported repository version errors
    pub fn unsupported_repo_version(
        declared: impl Into<String>,
        supported: impl Into<String>,
    ) -> Self {
        Self::UnsupportedRepoVersion {
            declared: declared.into(),
            supported: supported.into(),
        }
    }

    /// Helper for creating invalid repository version errors
    pub fn invalid_repo_version(version: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRepoVersion {
            version: version.into(),
            message: message.into(),
        }
    }

    /// Helper for creating invalid URL errors
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
