//! Core data structures for portfolio content.
//!
//! Defines the raw `Record` produced by the loader, the typed
//! `ProjectRecord` projection, and the `ContentKind` that ties a content
//! type to its expected columns and default file name.

use crate::constants::{
    CERTIFICATION_FIELDS, DEFAULT_CERTIFICATIONS_FILE, DEFAULT_PROJECTS_FILE, PROJECT_FIELDS,
};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One parsed row of a content file: field name to raw string value
///
/// Fields keep the order of the header row. Inserting a name that is already
/// present replaces its value in place, so duplicate header columns resolve
/// to the last cell while keeping the first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Value of a field, or the empty string when the field is absent
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Names from `expected` that this record does not carry
    pub fn missing_fields<'a>(&self, expected: &'a [String]) -> Vec<&'a str> {
        expected
            .iter()
            .filter(|name| !self.contains(name))
            .map(String::as_str)
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Typed projection of a project row
///
/// Every string field is non-empty; `tech_stack` always has at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub github_url: String,
    pub demo_url: String,
    pub is_current: bool,
    pub image_url: String,
}

/// Content types backed by a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Projects,
    Certifications,
}

impl ContentKind {
    /// Columns every row of this kind must carry
    pub fn expected_fields(&self) -> &'static [&'static str] {
        match self {
            ContentKind::Projects => PROJECT_FIELDS,
            ContentKind::Certifications => CERTIFICATION_FIELDS,
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ContentKind::Projects => DEFAULT_PROJECTS_FILE,
            ContentKind::Certifications => DEFAULT_CERTIFICATIONS_FILE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Projects => "projects",
            ContentKind::Certifications => "certifications",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "projects" | "project" => Ok(ContentKind::Projects),
            "certifications" | "certification" | "certs" => Ok(ContentKind::Certifications),
            other => Err(format!(
                "Unknown content kind '{}'. Valid kinds: projects, certifications",
                other
            )),
        }
    }
}
