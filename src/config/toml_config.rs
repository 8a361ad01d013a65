use crate::domain::model::{ProjectCatalog, ProjectRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A catalog defined in a TOML file:
///
/// ```toml
/// [catalog]
/// name = "main"
///
/// [[project]]
/// title = "AlgebraSource.com"
/// description = "An Algebra resource website."
/// img_src = "/static/images/algebra-source-project.png"
/// href = "https://algebrasource.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlCatalog {
    pub catalog: CatalogMeta,
    #[serde(default, rename = "project")]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub href: String,
}

impl TomlCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ConfigError {
            message: format!("Failed to read catalog file {}: {}", path.display(), e),
        })?;
        Self::from_str_content(&content)
    }

    pub fn from_str_content(content: &str) -> Result<Self> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Ok(parsed)
    }

    /// Converts into a validated [`ProjectCatalog`], preserving entry order.
    pub fn into_catalog(self) -> Result<ProjectCatalog> {
        let records = self
            .projects
            .into_iter()
            .map(|entry| {
                ProjectRecord::new(entry.title, entry.description, entry.img_src, entry.href)
            })
            .collect();

        let catalog = ProjectCatalog::new(self.catalog.name, records);
        catalog.validate()?;
        Ok(catalog)
    }
}

#[derive(Debug, Clone)]
pub struct TomlSource {
    path: PathBuf,
}

impl TomlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TomlSource {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<ProjectCatalog> {
        TomlCatalog::from_file(&self.path)?.into_catalog()
    }
}
