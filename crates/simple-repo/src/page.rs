//! Project and index page records and the parser that builds them.

use crate::config::SimpleConfig;
use crate::error::Result;
use crate::link::RepositoryPage;
use crate::package::DistributionPackage;
use crate::pep691::{Project, ProjectList, ProjectStatus};
use crate::util::check_repo_version;
use serde::Serialize;

/// A parsed project page of a simple repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPage {
    /// Name of the project, as given by the caller or the JSON response
    pub project: String,
    /// Every file listed on the page, in page order
    pub packages: Vec<DistributionPackage>,
    pub repository_version: Option<String>,
    /// Value of `_last-serial` or of the `X-PyPI-Last-Serial` header
    pub last_serial: Option<String>,
    /// Project versions (PEP 700); only JSON responses carry them
    pub versions: Option<Vec<String>>,
    /// PEP 708 "tracks" metadata
    pub tracks: Vec<String>,
    /// PEP 708 "alternate locations" metadata
    pub alternate_locations: Vec<String>,
    /// PEP 792 project status
    pub status: Option<ProjectStatus>,
    pub status_reason: Option<String>,
}

impl ProjectPage {
    /// Fills `last_serial` from an `X-PyPI-Last-Serial` header value when the
    /// page did not report one itself.
    #[must_use]
    pub fn with_last_serial(mut self, header: Option<&str>) -> Self {
        if self.last_serial.is_none() {
            self.last_serial = header.map(str::to_string);
        }
        self
    }
}

/// A parsed index (root) page of a simple repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    /// Project names as listed, not normalized
    pub projects: Vec<String>,
    pub repository_version: Option<String>,
    pub last_serial: Option<String>,
}

impl IndexPage {
    /// See [`ProjectPage::with_last_serial`].
    #[must_use]
    pub fn with_last_serial(mut self, header: Option<&str>) -> Self {
        if self.last_serial.is_none() {
            self.last_serial = header.map(str::to_string);
        }
        self
    }
}

/// Builds [`ProjectPage`] and [`IndexPage`] records from parsed HTML pages
/// or PEP 691 JSON.
///
/// # Examples
///
/// ```
/// use simple_repo::PageParser;
///
/// let parser = PageParser::new();
/// let page = parser
///     .index_page_from_json(r#"{"meta": {"api-version": "1.0", "_last-serial": 7},
///                               "projects": [{"name": "argset"}]}"#)
///     .unwrap();
///
/// assert_eq!(page.projects, vec!["argset"]);
/// assert_eq!(page.last_serial.as_deref(), Some("7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageParser {
    config: SimpleConfig,
}

impl PageParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimpleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimpleConfig {
        &self.config
    }

    /// Builds a project page from the links of an HTML project page.
    ///
    /// # Errors
    ///
    /// Fails if the page declares an unsupported repository version.
    pub fn project_page_from_repository_page(
        &self,
        project: &str,
        page: RepositoryPage,
    ) -> Result<ProjectPage> {
        self.check_version(page.repository_version.as_deref())?;

        let hint = self.hint(project);
        let packages = page
            .links
            .iter()
            .map(|link| DistributionPackage::from_link(link, hint))
            .collect();

        Ok(ProjectPage {
            project: project.to_string(),
            packages,
            repository_version: page.repository_version,
            last_serial: None,
            versions: None,
            tracks: page.tracks,
            alternate_locations: page.alternate_locations,
            status: None,
            status_reason: None,
        })
    }

    /// Builds an index page from the links of an HTML index page; each link
    /// text is a project name.
    ///
    /// # Errors
    ///
    /// Fails if the page declares an unsupported repository version.
    pub fn index_page_from_repository_page(&self, page: RepositoryPage) -> Result<IndexPage> {
        self.check_version(page.repository_version.as_deref())?;

        Ok(IndexPage {
            projects: page.links.into_iter().map(|link| link.text).collect(),
            repository_version: page.repository_version,
            last_serial: None,
        })
    }

    /// Parses a PEP 691 project detail response.
    ///
    /// Relative file URLs are resolved against `base_url` when one is given.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, an unsupported `api-version`, or a file URL
    /// that cannot be joined onto `base_url`.
    pub fn project_page_from_json(&self, json: &str, base_url: Option<&str>) -> Result<ProjectPage> {
        let project: Project = serde_json::from_str(json)?;
        self.check_version(Some(project.meta.api_version.as_str()))?;

        let hint = self.hint(&project.name);
        let packages = project
            .files
            .iter()
            .map(|file| DistributionPackage::from_file(file, hint, base_url))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProjectPage {
            packages,
            repository_version: Some(project.meta.api_version),
            last_serial: project.meta.last_serial,
            versions: project.versions,
            tracks: project.meta.tracks,
            alternate_locations: project.alternate_locations,
            status: project.project_status.status,
            status_reason: project.project_status.reason,
            project: project.name,
        })
    }

    /// Parses a PEP 691 index response.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or an unsupported `api-version`.
    pub fn index_page_from_json(&self, json: &str) -> Result<IndexPage> {
        let list: ProjectList = serde_json::from_str(json)?;
        self.check_version(Some(list.meta.api_version.as_str()))?;

        Ok(IndexPage {
            projects: list.projects.into_iter().map(|p| p.name).collect(),
            repository_version: Some(list.meta.api_version),
            last_serial: list.meta.last_serial,
        })
    }

    fn check_version(&self, declared: Option<&str>) -> Result<()> {
        match declared {
            Some(version) => check_repo_version(version, &self.config.supported_repository_version),
            None => Ok(()),
        }
    }

    fn hint<'a>(&self, project: &'a str) -> Option<&'a str> {
        self.config.use_project_hint.then_some(project)
    }
}
