//! Catalog domain: projects, filtering, selection, page view composition

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Asset, AssetKind, Catalog, CatalogError, Project, ProjectId};
pub use domain::filter::{filter, ActiveFilter, FilterPreset, FILTER_PRESETS};
pub use domain::site::{PressOutlet, Profile, SiteContent, TickerLogo};
pub use domain::state::{
    PortfolioView, SelectionEvent, SelectionState, SelectionStateMachine, StateError,
};
pub use domain::view::{compose, MainContent, Media, PageView, ProjectCard, ProjectDetail};

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
