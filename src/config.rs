//! Configuration management and validation.
//!
//! Resolves where content files live. Values come from defaults, then
//! environment variables, then explicit overrides (CLI flags).

use crate::constants::{
    DEFAULT_CERTIFICATIONS_FILE, DEFAULT_DATA_DIR, DEFAULT_PROJECTS_FILE, ENV_CERTIFICATIONS_FILE,
    ENV_DATA_DIR, ENV_PROJECTS_FILE,
};
use crate::error::{ContentError, Result};
use crate::models::ContentKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the portfolio content files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the CSV files
    pub data_dir: PathBuf,

    /// File name of the projects CSV within `data_dir`
    pub projects_file: String,

    /// File name of the certifications CSV within `data_dir`
    pub certifications_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            projects_file: DEFAULT_PROJECTS_FILE.to_string(),
            certifications_file: DEFAULT_CERTIFICATIONS_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables over the defaults
    ///
    /// Optional:
    /// - `PORTFOLIO_DATA_DIR`: directory holding the CSV files
    /// - `PORTFOLIO_PROJECTS_FILE`: projects file name
    /// - `PORTFOLIO_CERTIFICATIONS_FILE`: certifications file name
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(projects_file) = lookup(ENV_PROJECTS_FILE) {
            config.projects_file = projects_file;
        }
        if let Some(certifications_file) = lookup(ENV_CERTIFICATIONS_FILE) {
            config.certifications_file = certifications_file;
        }

        config.validate()?;
        debug!("Resolved content configuration: {:?}", config);
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_projects_file(mut self, file_name: impl Into<String>) -> Self {
        self.projects_file = file_name.into();
        self
    }

    pub fn with_certifications_file(mut self, file_name: impl Into<String>) -> Self {
        self.certifications_file = file_name.into();
        self
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(&self.projects_file)
    }

    pub fn certifications_path(&self) -> PathBuf {
        self.data_dir.join(&self.certifications_file)
    }

    /// Path of the file backing a content kind
    pub fn path_for(&self, kind: ContentKind) -> PathBuf {
        match kind {
            ContentKind::Projects => self.projects_path(),
            ContentKind::Certifications => self.certifications_path(),
        }
    }

    /// Check that file names are plain names inside `data_dir`
    pub fn validate(&self) -> Result<()> {
        for (label, file_name) in [
            ("projects", &self.projects_file),
            ("certifications", &self.certifications_file),
        ] {
            if file_name.trim().is_empty() {
                return Err(ContentError::configuration(format!(
                    "{} file name must not be empty",
                    label
                )));
            }
            if Path::new(file_name).components().count() != 1
                || file_name.contains('/')
                || file_name.contains('\\')
            {
                return Err(ContentError::configuration(format!(
                    "{} file name '{}' must not contain path separators",
                    label, file_name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.projects_path(), PathBuf::from("data/projects.csv"));
        assert_eq!(
            config.path_for(ContentKind::Certifications),
            PathBuf::from("data/certifications.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_without_variables_uses_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORTFOLIO_DATA_DIR", "/srv/portfolio/data"),
            ("PORTFOLIO_PROJECTS_FILE", "work.csv"),
        ]))
        .unwrap();

        assert_eq!(
            config.projects_path(),
            PathBuf::from("/srv/portfolio/data/work.csv")
        );
        assert_eq!(config.certifications_file, "certifications.csv");
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let config = Config::from_lookup(lookup_from(&[("PORTFOLIO_DATA_DIR", "  ")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_from_lookup_rejects_nested_file_name() {
        let result = Config::from_lookup(lookup_from(&[(
            "PORTFOLIO_CERTIFICATIONS_FILE",
            "../secrets.csv",
        )]));
        assert!(matches!(result, Err(ContentError::Configuration { .. })));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_data_dir("/tmp/content")
            .with_certifications_file("certs.csv");

        assert_eq!(
            config.certifications_path(),
            PathBuf::from("/tmp/content/certs.csv")
        );
    }

    #[test]
    fn test_validate_rejects_empty_file_name() {
        let config = Config::default().with_projects_file("");
        assert!(config.validate().is_err());
    }
}
