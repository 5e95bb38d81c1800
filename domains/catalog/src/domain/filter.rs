//! Filter engine: narrows the catalog to a single category tag

use serde::{Deserialize, Serialize};

use super::entities::{Catalog, Project};

/// Wire value that selects the whole catalog
pub const ALL_TAG: &str = "all";

/// The tag currently narrowing the catalog view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveFilter {
    #[default]
    All,
    Tag(String),
}

impl ActiveFilter {
    /// Parse the wire form; `"all"` is the only reserved value
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_TAG {
            ActiveFilter::All
        } else {
            ActiveFilter::Tag(raw.to_string())
        }
    }

    /// Wire form of the filter
    pub fn as_str(&self) -> &str {
        match self {
            ActiveFilter::All => ALL_TAG,
            ActiveFilter::Tag(tag) => tag,
        }
    }

    /// Check whether a project passes this filter
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Tag(tag) => project.tag == *tag,
        }
    }
}

impl From<String> for ActiveFilter {
    fn from(raw: String) -> Self {
        if raw == ALL_TAG {
            ActiveFilter::All
        } else {
            ActiveFilter::Tag(raw)
        }
    }
}

impl From<ActiveFilter> for String {
    fn from(filter: ActiveFilter) -> Self {
        match filter {
            ActiveFilter::All => ALL_TAG.to_string(),
            ActiveFilter::Tag(tag) => tag,
        }
    }
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable-order subsequence of the catalog passing `active`.
///
/// Total: an unknown tag yields an empty sequence.
pub fn filter<'a>(catalog: &'a Catalog, active: &ActiveFilter) -> Vec<&'a Project> {
    catalog
        .projects()
        .iter()
        .filter(|project| active.matches(project))
        .collect()
}

/// A header filter button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterPreset {
    pub label: &'static str,
    pub tag: &'static str,
}

impl FilterPreset {
    pub fn filter(&self) -> ActiveFilter {
        ActiveFilter::parse(self.tag)
    }
}

/// Header filter buttons, in display order
pub const FILTER_PRESETS: [FilterPreset; 5] = [
    FilterPreset { label: "All", tag: ALL_TAG },
    FilterPreset { label: "Brand", tag: "brand" },
    FilterPreset { label: "UX/UI", tag: "ux/ui" },
    FilterPreset { label: "Strategy", tag: "strategy" },
    FilterPreset { label: "Go to Market", tag: "go-to-market" },
];
