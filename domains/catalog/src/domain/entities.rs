//! Domain entities for the Catalog domain
//!
//! The catalog is an immutable, ordered list of projects loaded once from
//! JSON at start-up and shared read-only for the lifetime of the process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric project identifier, unique within a catalog
pub type ProjectId = u64;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate project id in catalog: {0}")]
    DuplicateId(ProjectId),
}

/// Kind of media an asset points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Video,
    Image,
    Figma,
    /// Any kind the front end has no renderer for
    #[serde(other)]
    Other,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Video => write!(f, "video"),
            AssetKind::Image => write!(f, "image"),
            AssetKind::Figma => write!(f, "figma"),
            AssetKind::Other => write!(f, "other"),
        }
    }
}

/// A single piece of project media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub url: String,
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Main category tag, matched by the header filters
    pub tag: String,
    #[serde(default, alias = "asssets")]
    pub assets: Vec<Asset>,
    #[serde(alias = "project_title")]
    pub title: String,
    pub client: String,
    pub overview: String,
    #[serde(default)]
    pub contribution: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub impact: Vec<String>,
    /// Display tags shown in the detail view
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// The asset shown on cards and at the top of the detail view
    pub fn primary_asset(&self) -> Option<&Asset> {
        self.assets.first()
    }

    /// Check whether the project has anything to show on a card
    pub fn has_assets(&self) -> bool {
        !self.assets.is_empty()
    }
}

/// Immutable, ordered project catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }

        let catalog = Self { projects };

        for project in catalog.projects_without_assets() {
            tracing::warn!(
                project_id = project.id,
                title = %project.title,
                "Project has no assets and will not appear in the grid"
            );
        }

        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of projects
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.len(),
            "Project catalog loaded"
        );
        Ok(catalog)
    }

    /// All projects in catalog order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Distinct category tags in first-seen order
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.tag.as_str())
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    /// Projects that would render no card
    pub fn projects_without_assets(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.has_assets())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
