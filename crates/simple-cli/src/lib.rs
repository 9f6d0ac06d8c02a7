//! Library half of the `simple-classify` command.
//!
//! The binary parses [`Args`](cli::Args), sets up logging and calls [`run`];
//! everything that writes output lives here so it can be tested without
//! spawning a process.

pub mod cli;
pub mod config;
pub mod output;

use anyhow::Context;
use cli::Args;
use output::Classification;
use simple_repo::PageParser;
use std::io::Write;

/// Classifies the inputs named by `args` and writes one JSON line per result
/// to `out`.
///
/// Returns `false` if any bare filename could not be classified.
///
/// # Errors
///
/// Fails on an unreadable config or project file, a project page the parser
/// rejects, or a write error.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = config::load_config(args.config.as_deref())?;
    let mut all_parsed = true;

    if let Some(path) = &args.project_json {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let page = PageParser::with_config(config)
            .project_page_from_json(&json, args.base_url.as_deref())
            .with_context(|| format!("failed to parse project page {}", path.display()))?;

        tracing::debug!(project = %page.project, packages = page.packages.len(), "parsed project page");
        for package in &page.packages {
            serde_json::to_writer(&mut *out, package)?;
            writeln!(out)?;
        }
    }

    for filename in &args.filenames {
        let record = Classification::of(filename, args.hint.as_deref());
        all_parsed &= record.is_parsed();
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }

    Ok(all_parsed)
}
