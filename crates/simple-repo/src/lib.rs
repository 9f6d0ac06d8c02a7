//! Records for pages of a Python simple repository (PEP 503 / PEP 691).
//!
//! This crate turns already-parsed repository pages into typed records:
//! distribution packages with their classified filenames, project pages and
//! index pages. It does no network I/O and no HTML tag extraction; callers
//! hand over either the links of an HTML page or the body of a JSON
//! response.
//!
//! # Architecture
//!
//! - **Link / RepositoryPage**: flat input records from an HTML front end
//! - **PEP 691 models**: `serde` structs for the JSON API
//! - **DistributionPackage**: one file, classified with `simple-core`
//! - **PageParser**: builds `ProjectPage` and `IndexPage`, checking the
//!   declared repository version (PEP 629) against [`SimpleConfig`]
//! - **Error Handling**: typed errors with `thiserror`
//!
//! # Examples
//!
//! ```
//! use simple_core::PackageType;
//! use simple_repo::{Link, PageParser, RepositoryPage};
//!
//! let page = RepositoryPage {
//!     repository_version: Some("1.0".into()),
//!     links: vec![Link::new(
//!         "argset-0.1.0.tar.gz",
//!         "https://files.example.com/argset-0.1.0.tar.gz#sha256=8a41ee47",
//!     )],
//!     ..RepositoryPage::default()
//! };
//!
//! let project = PageParser::new()
//!     .project_page_from_repository_page("argset", page)
//!     .unwrap();
//!
//! let pkg = &project.packages[0];
//! assert_eq!(pkg.version.as_deref(), Some("0.1.0"));
//! assert_eq!(pkg.package_type, Some(PackageType::Sdist));
//! assert_eq!(pkg.digests["sha256"], "8a41ee47");
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod package;
pub mod page;
pub mod pep691;
pub mod util;

pub use config::{PYPI_SIMPLE_ENDPOINT, SUPPORTED_REPOSITORY_VERSION, SimpleConfig};
pub use error::{RepoError, Result};
pub use link::{AttrValue, Link, RepositoryPage};
pub use package::DistributionPackage;
pub use page::{IndexPage, PageParser, ProjectPage};
pub use pep691::ProjectStatus;
pub use util::check_repo_version;
