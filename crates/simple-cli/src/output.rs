//! JSON line records written to stdout.

use serde::Serialize;
use simple_core::{ParsedFilename, classify};

/// Result of classifying one filename.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Classification<'a> {
    Parsed {
        filename: &'a str,
        #[serde(flatten)]
        parsed: ParsedFilename,
    },
    Unparsable {
        filename: &'a str,
        error: String,
    },
}

impl<'a> Classification<'a> {
    pub fn of(filename: &'a str, project_hint: Option<&str>) -> Self {
        match classify(filename, project_hint) {
            Ok(parsed) => Self::Parsed { filename, parsed },
            Err(e) => Self::Unparsable {
                filename,
                error: e.to_string(),
            },
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}
