use thiserror::Error;

/// Returned when no filename grammar matches a distribution filename.
///
/// This is the only way classification fails. Malformed or missing project
/// hints never produce an error on their own; they only weaken
/// disambiguation.
///
/// # Examples
///
/// ```
/// use simple_core::{UnparsableFilename, classify};
///
/// let err = classify("500.tar.bz2", None).unwrap_err();
/// assert_eq!(err, UnparsableFilename::new("500.tar.bz2"));
/// assert_eq!(err.to_string(), r#"cannot parse package filename: "500.tar.bz2""#);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse package filename: {filename:?}")]
pub struct UnparsableFilename {
    /// The filename that could not be classified, verbatim
    pub filename: String,
}

impl UnparsableFilename {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// Returned when a string does not name one of the known package types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown package type: {0:?}")]
pub struct UnknownPackageType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_display() {
        let error = UnparsableFilename::new("pip-18.0.txt");
        assert_eq!(
            error.to_string(),
            "cannot parse package filename: \"pip-18.0.txt\""
        );
    }

    #[test]
    fn test_unparsable_keeps_filename_verbatim() {
        let error = UnparsableFilename::new("thrivext-0.0.3    .tar.gz");
        assert_eq!(error.filename, "thrivext-0.0.3    .tar.gz");
    }

    #[test]
    fn test_unknown_package_type_display() {
        let error = UnknownPackageType("deb".into());
        assert_eq!(error.to_string(), "unknown package type: \"deb\"");
    }
}
