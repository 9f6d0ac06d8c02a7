use serde::Deserialize;

/// The base URL for PyPI's simple API.
pub const PYPI_SIMPLE_ENDPOINT: &str = "https://pypi.org/simple/";

/// The maximum supported simple repository version (PEP 629).
pub const SUPPORTED_REPOSITORY_VERSION: &str = "1.0";

/// Settings for turning repository pages into records.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
///
/// # Defaults
///
/// - `supported_repository_version`: `"1.0"`
/// - `use_project_hint`: `true`
///
/// # Examples
///
/// ```
/// use simple_repo::config::SimpleConfig;
///
/// let config: SimpleConfig = serde_json::from_str(r#"{"use_project_hint": false}"#).unwrap();
/// assert!(!config.use_project_hint);
/// assert_eq!(config.supported_repository_version, "1.0");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleConfig {
    /// Highest repository version accepted without error; a greater minor
    /// component only logs a warning
    #[serde(default = "default_supported_repository_version")]
    pub supported_repository_version: String,
    /// Pass the project page's name to the filename classifier as a hint
    #[serde(default = "default_true")]
    pub use_project_hint: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            supported_repository_version: default_supported_repository_version(),
            use_project_hint: true,
        }
    }
}

fn default_supported_repository_version() -> String {
    SUPPORTED_REPOSITORY_VERSION.to_string()
}

const fn default_true() -> bool {
    true
}
