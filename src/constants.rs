//! Application constants for portfolio content loading
//!
//! Field names, default substitutions, file names and environment variable
//! names used throughout the crate.

// =============================================================================
// Content Field Sets
// =============================================================================

/// Columns every certification row must carry
pub const CERTIFICATION_FIELDS: &[&str] = &["title", "issuer", "date", "category", "url"];

/// Columns every project row must carry
pub const PROJECT_FIELDS: &[&str] = &[
    "title",
    "description",
    "tech_stack",
    "category",
    "github_url",
    "demo_url",
    "is_current",
    "image_url",
];

/// Separator between entries of the `tech_stack` column
pub const TECH_STACK_SEPARATOR: char = ',';

/// Literal that marks a project as current (compared case-insensitively)
pub const TRUE_LITERAL: &str = "true";

// =============================================================================
// Project Defaults
// =============================================================================

pub mod project_defaults {
    pub const TITLE: &str = "Untitled Project";
    pub const DESCRIPTION: &str = "No description available.";
    pub const CATEGORY: &str = "other";
    pub const GITHUB_URL: &str = "#";
    pub const DEMO_URL: &str = "#";
    pub const IMAGE_URL: &str = "/static/images/projects/default.png";

    /// Substituted when `tech_stack` has no usable entries
    pub const TECH_STACK_ENTRY: &str = "Unknown";
}

// =============================================================================
// File Locations
// =============================================================================

/// Directory holding the content files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

pub const DEFAULT_PROJECTS_FILE: &str = "projects.csv";
pub const DEFAULT_CERTIFICATIONS_FILE: &str = "certifications.csv";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_DATA_DIR: &str = "PORTFOLIO_DATA_DIR";
pub const ENV_PROJECTS_FILE: &str = "PORTFOLIO_PROJECTS_FILE";
pub const ENV_CERTIFICATIONS_FILE: &str = "PORTFOLIO_CERTIFICATIONS_FILE";
