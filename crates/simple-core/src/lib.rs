//! Distribution filename classification for Python simple repositories.
//!
//! Package indexes speaking the Simple Repository API (PEP 503/691) list
//! downloadable archives by filename only. This crate recovers the project
//! name, version and package type from such filenames, despite the legacy
//! formats never sharing a single grammar.
//!
//! # Architecture
//!
//! simple-core defines:
//! - **Pattern table**: ordered `(PackageType, Regex)` pairs, split into
//!   unambiguous grammars (egg, rpm, wheel) and ambiguous ones (dumb, msi,
//!   sdist, wininst)
//! - **Classifier**: [`classify`], which tries the unambiguous grammars, then
//!   the ambiguous ones with a project-name hint, then without one
//! - **Error type**: [`UnparsableFilename`], the only failure mode
//!
//! Compiled patterns are shared read-only statics, so classification is safe
//! to call from any number of threads.
//!
//! # Examples
//!
//! ```
//! use simple_core::{PackageType, classify};
//!
//! let parsed = classify("requests-2.31.0-py3-none-any.whl", None).unwrap();
//! assert_eq!(parsed.project, "requests");
//! assert_eq!(parsed.version, "2.31.0");
//! assert_eq!(parsed.package_type, PackageType::Wheel);
//!
//! // The page a file was found on tells where an ambiguous name ends
//! let parsed = classify("carbonara-archinfo-7.7.9.14-1.tar.gz", Some("carbonara-archinfo")).unwrap();
//! assert_eq!(parsed.project, "carbonara-archinfo");
//! assert_eq!(parsed.version, "7.7.9.14-1");
//! assert_eq!(parsed.package_type, PackageType::Sdist);
//! ```

pub mod error;
pub mod filename;
pub mod package_type;
mod patterns;

// Re-export commonly used types
pub use error::{UnknownPackageType, UnparsableFilename};
pub use filename::{ParsedFilename, classify};
pub use package_type::PackageType;
