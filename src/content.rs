//! Portfolio content assembled once at startup.
//!
//! `PortfolioContent::load` is the single initialization point: the binary
//! (or any server embedding this crate) calls it once and hands the value
//! down by reference. The value is never mutated afterwards, so it can be
//! shared across threads behind an `Arc`.

use crate::config::Config;
use crate::error::Result;
use crate::models::{ProjectRecord, Record};
use crate::projection::{load_certifications, load_projects};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioContent {
    projects: Vec<ProjectRecord>,
    certifications: Vec<Record>,
}

impl PortfolioContent {
    /// Load every content set from the files named by `config`
    ///
    /// Missing or unreadable files leave the corresponding set empty.
    pub fn load(config: &Config) -> Self {
        let projects = load_projects(&config.projects_path());
        let certifications = load_certifications(&config.certifications_path());

        info!(
            "Portfolio content loaded: {} projects, {} certifications",
            projects.len(),
            certifications.len()
        );

        Self {
            projects,
            certifications,
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn certifications(&self) -> &[Record] {
        &self.certifications
    }

    /// Projects flagged as currently in progress
    pub fn current_projects(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter().filter(|project| project.is_current)
    }

    /// Projects whose category matches, ignoring case
    pub fn projects_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ProjectRecord> {
        self.projects
            .iter()
            .filter(move |project| project.category.eq_ignore_ascii_case(category))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.certifications.is_empty()
    }

    /// JSON array of projects, as served by the projects API
    pub fn projects_json(&self, pretty: bool) -> Result<String> {
        to_json(&self.projects, pretty)
    }

    /// JSON array of certifications, as served by the certifications API
    pub fn certifications_json(&self, pretty: bool) -> Result<String> {
        to_json(&self.certifications, pretty)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_content(dir: &TempDir) {
        fs::write(
            dir.path().join("projects.csv"),
            "title,description,tech_stack,category,github_url,demo_url,is_current,image_url\n\
             Harmonia,Alzheimer's support app,\"Flutter,Dart\",mobile,,,false,\n\
             Portfolio Website,This very website,\"Python,Flask\",web,,,true,\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("certifications.csv"),
            "title,issuer,date,category,url\n\
             Python Programming,Codecademy,2024,python,#\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_config() {
        let dir = TempDir::new().unwrap();
        write_content(&dir);

        let content = PortfolioContent::load(&Config::default().with_data_dir(dir.path()));

        assert_eq!(content.projects().len(), 2);
        assert_eq!(content.certifications().len(), 1);
        assert_eq!(
            content
                .current_projects()
                .map(|p| p.title.as_str())
                .collect::<Vec<_>>(),
            vec!["Portfolio Website"]
        );
        assert_eq!(content.projects_in_category("MOBILE").count(), 1);
    }

    #[test]
    fn test_load_with_missing_files_is_empty() {
        let dir = TempDir::new().unwrap();

        let content = PortfolioContent::load(&Config::default().with_data_dir(dir.path()));

        assert!(content.is_empty());
        assert_eq!(content.projects_json(false).unwrap(), "[]");
        assert_eq!(content.certifications_json(false).unwrap(), "[]");
    }

    #[test]
    fn test_certifications_json_keeps_column_order() {
        let dir = TempDir::new().unwrap();
        write_content(&dir);

        let content = PortfolioContent::load(&Config::default().with_data_dir(dir.path()));

        assert_eq!(
            content.certifications_json(false).unwrap(),
            r##"[{"title":"Python Programming","issuer":"Codecademy","date":"2024","category":"python","url":"#"}]"##
        );
    }

    #[test]
    fn test_projects_json_shape() {
        let dir = TempDir::new().unwrap();
        write_content(&dir);

        let content = PortfolioContent::load(&Config::default().with_data_dir(dir.path()));
        let json: serde_json::Value =
            serde_json::from_str(&content.projects_json(true).unwrap()).unwrap();

        assert_eq!(json[0]["tech_stack"], serde_json::json!(["Flutter", "Dart"]));
        assert_eq!(json[1]["is_current"], serde_json::json!(true));
        assert_eq!(json[0]["github_url"], serde_json::json!("#"));
    }

    #[test]
    fn test_shared_read_only_across_threads() {
        let dir = TempDir::new().unwrap();
        write_content(&dir);

        let content = Arc::new(PortfolioContent::load(
            &Config::default().with_data_dir(dir.path()),
        ));

        let counts: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let content = Arc::clone(&content);
                    scope.spawn(move || content.projects().len() + content.certifications().len())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(counts, vec![3; 4]);
    }
}
