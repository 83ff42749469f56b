//! Content-specific views over loaded records.
//!
//! Projects are coerced into `ProjectRecord`s with defaults applied;
//! certifications are passed through as raw records.

use crate::constants::{TECH_STACK_SEPARATOR, TRUE_LITERAL, project_defaults};
use crate::loader::StructuredRecordLoader;
use crate::models::{ContentKind, ProjectRecord, Record};
use std::path::Path;
use tracing::debug;

/// Load and project every valid project row in `path`
pub fn load_projects(path: &Path) -> Vec<ProjectRecord> {
    let records = StructuredRecordLoader::for_kind(ContentKind::Projects).load(path);
    let projects = project_all(&records);
    debug!("Projected {} projects from {}", projects.len(), path.display());
    projects
}

/// Load every valid certification row in `path`, unchanged
pub fn load_certifications(path: &Path) -> Vec<Record> {
    StructuredRecordLoader::for_kind(ContentKind::Certifications).load(path)
}

pub fn project_all(records: &[Record]) -> Vec<ProjectRecord> {
    records.iter().map(project).collect()
}

/// Coerce a raw project row into its typed form
///
/// Pure function of the row: absent or blank string fields take their
/// defaults, everything else passes through as written. Whitespace-only
/// values count as blank. `tech_stack` is more than a plain split: entries
/// are trimmed and empty ones dropped, so `"Python,,Flask"` yields
/// `["Python", "Flask"]`.
pub fn project(record: &Record) -> ProjectRecord {
    let field = |name: &str, default: &str| or_default(record.get_or_empty(name), default);

    ProjectRecord {
        title: field("title", project_defaults::TITLE),
        description: field("description", project_defaults::DESCRIPTION),
        tech_stack: parse_tech_stack(record.get_or_empty("tech_stack")),
        category: field("category", project_defaults::CATEGORY),
        github_url: field("github_url", project_defaults::GITHUB_URL),
        demo_url: field("demo_url", project_defaults::DEMO_URL),
        is_current: parse_is_current(record.get_or_empty("is_current")),
        image_url: field("image_url", project_defaults::IMAGE_URL),
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn parse_tech_stack(raw: &str) -> Vec<String> {
    let entries: Vec<String> = raw
        .split(TECH_STACK_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        vec![project_defaults::TECH_STACK_ENTRY.to_string()]
    } else {
        entries
    }
}

fn parse_is_current(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(TRUE_LITERAL)
}
