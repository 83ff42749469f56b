//! Portfolio Content Library
//!
//! Loads the content of a personal portfolio site (projects and
//! certifications) from flat CSV files.
//!
//! This library provides tools for:
//! - Reading delimited files into ordered field-name/value records
//! - Dropping rows that lack required columns without aborting the load
//! - Projecting project rows into typed records with documented defaults
//! - Degrading missing or unreadable files to empty results plus a log entry
//! - Assembling all content once at startup for read-only sharing

pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod loader;
pub mod models;
pub mod projection;

pub use config::Config;
pub use content::PortfolioContent;
pub use error::{ContentError, Result};
pub use loader::{LoadOutcome, LoadStats, SkippedRow, StructuredRecordLoader, load};
pub use models::{ContentKind, ProjectRecord, Record};
pub use projection::{load_certifications, load_projects, project};
